//! Generate command report data structures.

use std::path::PathBuf;

use mkproj_codegen::{Diagnostic, PreviewFile, Severity};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Project description from the manifest.
    pub project: String,
    /// Provider name.
    pub backend: String,
    /// Targets in registration order, with their identifiers.
    pub targets: Vec<(String, String)>,
    /// Non-fatal messages collected during the run.
    pub diagnostics: Vec<Diagnostic>,
    /// Files written or previewed.
    pub result: GenerationResult,
}

/// Result of project generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Artifacts were written to disk.
    Written(Vec<PathBuf>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            if diag.severity == Severity::Warning {
                out.warning(&describe(diag));
            }
        }

        match &self.result {
            GenerationResult::Written(artifacts) => self.render_written(out, artifacts),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, artifacts: &[PathBuf]) {
        out.title(&format!("{} ({})", self.project, self.backend));
        out.newline();

        out.section(&format!("Targets ({})", self.targets.len()));
        for (name, id) in &self.targets {
            out.list_item(&format!("{} {}", name, id));
        }
        out.newline();

        out.section("Generated");
        for path in artifacts {
            out.added_item(&path.display().to_string());
        }

        let infos: Vec<_> = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Info)
            .collect();
        if !infos.is_empty() {
            out.newline();
            out.section("Notes");
            for diag in infos {
                out.list_item(&describe(diag));
            }
        }
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", files.len()));
}

fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{} ({})", diag.message, loc),
        None => diag.message.clone(),
    }
}
