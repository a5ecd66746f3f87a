//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Project name.
    pub project: String,
    /// Backend selected by the manifest.
    pub backend: String,
    /// Path from the output directory to the source root.
    pub file_prefix: String,
    /// Targets in manifest order.
    pub targets: Vec<TargetSummary>,
    /// Validation errors found after scanning.
    pub errors: Vec<String>,
}

/// One target as seen by `check`.
#[derive(Debug)]
pub struct TargetSummary {
    pub name: String,
    pub kind: String,
    /// Module path relative to the source root.
    pub path: String,
    /// Number of files passing the target's filters.
    pub files: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("  project", &self.project);
        out.key_value("  backend", &self.backend);
        if !self.file_prefix.is_empty() {
            out.key_value("  prefix", &self.file_prefix);
        }
        out.newline();

        let count = self.targets.len();
        out.section(&format!(
            "  {} target{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for target in &self.targets {
            let path = if target.path.is_empty() {
                "."
            } else {
                target.path.as_str()
            };
            out.list_item(&format!(
                "{} ({}, {}, {} file{})",
                target.name,
                target.kind,
                path,
                target.files,
                if target.files == 1 { "" } else { "s" }
            ));
        }
    }
}
