//! Target and build configuration descriptors handed to providers.

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{FileNode, FilterRules, Version};

/// Kind of build unit a target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// The single main program of a project
    Executable,
    /// A supporting library, one per module
    Library,
}

impl TargetKind {
    /// Returns the kind as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Executable => "executable",
            TargetKind::Library => "library",
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(self, TargetKind::Executable)
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "executable" | "exe" | "bin" => Ok(TargetKind::Executable),
            "library" | "lib" => Ok(TargetKind::Library),
            _ => Err(format!(
                "unknown target kind '{}', expected 'executable' or 'library'",
                s
            )),
        }
    }
}

/// One build unit: a module tree plus the rules selecting its files.
///
/// Targets are immutable once built and consumed once per provider run.
#[derive(Debug, Clone)]
pub struct Target {
    /// Target name, also the emitted project/binary name
    pub name: String,
    /// Executable or library
    pub kind: TargetKind,
    /// Module directory tree; the root's name is not part of file paths
    pub tree: FileNode,
    /// Module directory relative to the source root (`/`-separated, `""` for the root)
    pub module_path: String,
    /// Include/exclude rules for the module's files
    pub filters: FilterRules,
    /// Warning flags applying to this target only
    pub warnings: Vec<String>,
}

impl Target {
    /// Create a target with no filters and no extra warnings.
    pub fn new(
        name: impl Into<String>,
        kind: TargetKind,
        module_path: impl Into<String>,
        tree: FileNode,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            tree,
            module_path: module_path.into(),
            filters: FilterRules::default(),
            warnings: Vec::new(),
        }
    }

    /// Set the filter rules.
    pub fn with_filters(mut self, filters: FilterRules) -> Self {
        self.filters = filters;
        self
    }

    /// Set the per-target warnings.
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn is_executable(&self) -> bool {
        self.kind.is_executable()
    }
}

/// Global settings shared by every provider call of a run.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Project name, used for workspace artifact names
    pub project_name: String,
    /// Human readable project name (CMake `project()`, workspace title)
    pub description: String,
    /// Directory receiving the generated artifacts
    pub output_dir: PathBuf,
    /// Root of the source tree every module lives under
    pub source_root: PathBuf,
    /// Path from the output directory to the source root, `/`-separated
    pub file_prefix: String,
    /// Global preprocessor defines, without the `-D`
    pub defines: Vec<String>,
    /// Global warning flags
    pub warnings: Vec<String>,
    /// Extra include directories relative to the source root
    pub include_dirs: Vec<String>,
    /// External libraries linked into the executable
    pub libraries: Vec<String>,
    /// Environment variable pointing at prebuilt third-party libraries
    pub libs_env: Option<String>,
    /// Minimum build-tool version
    pub min_version: Version,
}

impl BuildConfig {
    /// Create a configuration with the description defaulting to the name.
    pub fn new(project_name: impl Into<String>) -> Self {
        let project_name = project_name.into();
        Self {
            description: project_name.clone(),
            project_name,
            ..Default::default()
        }
    }
}
