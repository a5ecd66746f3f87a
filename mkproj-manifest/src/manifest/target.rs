use mkproj_core::{
    FileNode, FilterRules, PatternError, Target, TargetKind, is_absolute_path,
    module_relative_path,
};
use serde::Deserialize;

/// One `[[target]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TargetConfig {
    /// Target name
    pub name: String,

    /// Executable or library
    pub kind: TargetKind,

    /// Module directory relative to the source root
    #[serde(default = "default_path")]
    pub path: String,

    /// Include patterns; empty means every file
    #[serde(default)]
    pub include: Vec<String>,

    /// Exclude patterns; always win over includes
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Warning flags for this target only
    #[serde(default)]
    pub warnings: Vec<String>,
}

fn default_path() -> String {
    ".".to_string()
}

impl TargetConfig {
    /// Module path relative to the source root, canonical (`""` for the root).
    ///
    /// `None` when the path is absolute or escapes the source root.
    pub fn module_path(&self) -> Option<String> {
        if is_absolute_path(&self.path) {
            return None;
        }
        module_relative_path("", &self.path)
    }

    /// Compile the include/exclude lists.
    pub fn filter_rules(&self) -> Result<FilterRules, PatternError> {
        FilterRules::from_patterns(&self.include, &self.exclude)
    }

    /// Build the core target around a scanned module tree.
    pub fn to_target(&self, tree: FileNode) -> Result<Target, PatternError> {
        Ok(Target::new(
            self.name.clone(),
            self.kind,
            self.module_path().unwrap_or_default(),
            tree,
        )
        .with_filters(self.filter_rules()?)
        .with_warnings(self.warnings.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(path: &str) -> TargetConfig {
        TargetConfig {
            name: "sky".to_string(),
            kind: TargetKind::Library,
            path: path.to_string(),
            include: Vec::new(),
            exclude: vec!["*.asm".to_string()],
            warnings: vec!["-Wno-unused".to_string()],
        }
    }

    #[test]
    fn test_module_path() {
        assert_eq!(target(".").module_path().as_deref(), Some(""));
        assert_eq!(
            target("engines\\sky\\").module_path().as_deref(),
            Some("engines/sky")
        );
        assert_eq!(target("../sky").module_path(), None);
        assert_eq!(target("/usr/src/sky").module_path(), None);
    }

    #[test]
    fn test_to_target() {
        let tree = FileNode::dir(
            "sky",
            [FileNode::file("sky.cpp"), FileNode::file("scale.asm")],
        );
        let target = target("engines/sky").to_target(tree).unwrap();

        assert_eq!(target.module_path, "engines/sky");
        assert_eq!(target.warnings, ["-Wno-unused"]);
        assert_eq!(target.tree.files(&target.filters).len(), 1);
    }
}
