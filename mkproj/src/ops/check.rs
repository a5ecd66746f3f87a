//! Check operation - manifest and module validation.

use std::path::Path;

use eyre::Result;
use mkproj_manifest::ProjectToml;

use super::load;
use crate::reports::{CheckReport, TargetSummary};

/// Execute the check operation.
///
/// Scans every module and runs the driver's validation without opening
/// any artifact.
pub fn check(file: &ProjectToml, output_dir: &Path) -> Result<CheckReport> {
    let project = load(file, output_dir)?;

    let mut errors = Vec::new();
    if let Err(e) = mkproj_codegen::validate(&project.config, &project.targets) {
        errors.push(e.to_string());
    }

    let targets = project
        .targets
        .iter()
        .map(|t| TargetSummary {
            name: t.name.clone(),
            kind: t.kind.to_string(),
            path: t.module_path.clone(),
            files: t.tree.files(&t.filters).len(),
        })
        .collect();

    Ok(CheckReport {
        config_path: file.path().to_path_buf(),
        project: project.config.project_name.clone(),
        backend: file.manifest().project.backend.to_string(),
        file_prefix: project.config.file_prefix.clone(),
        targets,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_counts_filtered_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("a.cpp"), "").unwrap();
        fs::write(root.join("b.cpp"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::write(
            root.join("mkproj.toml"),
            "[project]\nname = \"demo\"\n\n[[target]]\nname = \"demo\"\nkind = \"executable\"\ninclude = [\"*.cpp\"]\n",
        )
        .unwrap();

        let file = ProjectToml::open(root.join("mkproj.toml")).unwrap();
        let report = check(&file, root).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.backend, "cmake");
        assert_eq!(report.file_prefix, "");
        assert_eq!(report.targets.len(), 1);
        assert_eq!(report.targets[0].files, 2);
    }
}
