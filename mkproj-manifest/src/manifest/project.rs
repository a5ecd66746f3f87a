use std::path::PathBuf;

use mkproj_core::Version;
use serde::Deserialize;

use super::Backend;

/// Project-wide settings from the `[project]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name, used for workspace artifact names
    pub name: String,

    /// Display name (CMake `project()`, workspace title); defaults to `name`
    pub description: Option<String>,

    /// Source root relative to the manifest's directory
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Backend used when none is given on the command line
    #[serde(default)]
    pub backend: Backend,

    /// Minimum build-tool version
    #[serde(default)]
    pub min_version: Version,

    /// Preprocessor defines, without `-D`
    #[serde(default)]
    pub defines: Vec<String>,

    /// Global warning flags
    #[serde(default)]
    pub warnings: Vec<String>,

    /// Extra include directories relative to the source root
    #[serde(default)]
    pub include_dirs: Vec<String>,

    /// External libraries linked into the executable
    #[serde(default)]
    pub libraries: Vec<String>,

    /// Environment variable pointing at prebuilt third-party libraries
    pub libs_env: Option<String>,
}

fn default_source_root() -> PathBuf {
    PathBuf::from(".")
}

impl ProjectConfig {
    /// The display name, falling back to the project name.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }
}
