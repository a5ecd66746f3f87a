//! List operation - filtered file lists per target.

use std::path::Path;

use eyre::Result;
use mkproj_manifest::ProjectToml;

use super::load;
use crate::reports::{ListReport, TargetFiles};

/// Execute the list operation.
pub fn list(file: &ProjectToml, output_dir: &Path) -> Result<ListReport> {
    let project = load(file, output_dir)?;

    let targets = project
        .targets
        .iter()
        .map(|t| TargetFiles {
            name: t.name.clone(),
            files: t.tree.files(&t.filters),
        })
        .collect();

    Ok(ListReport { targets })
}
