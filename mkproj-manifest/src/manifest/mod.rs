//! Manifest types and parsing for mkproj.toml files.

mod backend;
mod file;
mod parse;
mod project;
mod target;
mod validate;

pub use backend::Backend;
pub use file::{MANIFEST_FILE, ProjectToml};
use mkproj_core::{BuildConfig, canonicalize_separators};
pub use parse::parse_manifest;
pub use project::ProjectConfig;
use serde::Deserialize;
pub use target::TargetConfig;
pub use validate::ParseContext;

/// Root manifest for mkproj.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project-wide settings
    pub project: ProjectConfig,

    /// Build targets in declaration order
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetConfig>,
}

impl Manifest {
    /// Project-wide build configuration.
    ///
    /// Paths that depend on where the manifest lives (output directory,
    /// source root, file prefix) are left for the caller to fill in.
    pub fn build_config(&self) -> BuildConfig {
        let project = &self.project;
        BuildConfig {
            description: project.description().to_string(),
            defines: project.defines.clone(),
            warnings: project.warnings.clone(),
            include_dirs: project
                .include_dirs
                .iter()
                .map(|d| canonicalize_separators(d))
                .collect(),
            libraries: project.libraries.clone(),
            libs_env: project.libs_env.clone(),
            min_version: project.min_version.clone(),
            ..BuildConfig::new(project.name.clone())
        }
    }
}
