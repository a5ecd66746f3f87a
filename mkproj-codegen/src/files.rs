//! Flattened, prefixed file lists for target emission.

use mkproj_core::{BuildConfig, FileKind, Target, join_path};

/// One file of a target as a backend emits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as written into the artifact: `<file_prefix>/<module_path>/<relative>`
    pub path: String,
    /// Path relative to the module root
    pub relative: String,
    pub kind: FileKind,
}

impl SourceFile {
    /// Whether the file ends up in a compile list at all.
    ///
    /// Headers and unrecognized files are listed alongside the sources.
    pub fn is_compiled(&self) -> bool {
        !matches!(self.kind, FileKind::Resource | FileKind::Assembly)
    }
}

/// Base path prepended to a target's module-relative file paths.
pub fn module_prefix(target: &Target, config: &BuildConfig) -> String {
    join_path(&config.file_prefix, &target.module_path)
}

/// Flatten a target's filtered tree into prefixed file entries, in
/// traversal order.
pub fn collect_files(target: &Target, config: &BuildConfig) -> Vec<SourceFile> {
    let prefix = module_prefix(target, config);

    target
        .tree
        .files(&target.filters)
        .into_iter()
        .map(|(relative, kind)| SourceFile {
            path: join_path(&prefix, &relative),
            relative,
            kind,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use mkproj_core::{FileNode, FilterRules, TargetKind};

    use super::*;

    fn config(prefix: &str) -> BuildConfig {
        BuildConfig {
            file_prefix: prefix.to_string(),
            ..BuildConfig::new("demo")
        }
    }

    #[test]
    fn test_prefix_and_module_path() {
        let tree = FileNode::dir(
            "sky",
            [
                FileNode::file("sky.cpp"),
                FileNode::dir("music", [FileNode::file("adlib.cpp")]),
            ],
        );
        let target = Target::new("sky", TargetKind::Library, "engines/sky", tree);

        let files = collect_files(&target, &config(".."));
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            ["../engines/sky/sky.cpp", "../engines/sky/music/adlib.cpp"]
        );
        assert_eq!(files[1].relative, "music/adlib.cpp");
    }

    #[test]
    fn test_root_module_without_prefix() {
        let tree = FileNode::dir(".", [FileNode::file("main.cpp")]);
        let target = Target::new("demo", TargetKind::Executable, "", tree);

        let files = collect_files(&target, &config(""));
        assert_eq!(files[0].path, "main.cpp");
    }

    #[test]
    fn test_filters_and_kinds() {
        let tree = FileNode::dir(
            ".",
            [
                FileNode::file("a.cpp"),
                FileNode::file("icon.rc"),
                FileNode::file("scale.asm"),
                FileNode::file("old.cpp"),
            ],
        );
        let filters = FilterRules::from_patterns(Vec::<&str>::new(), ["old.cpp"]).unwrap();
        let target = Target::new("demo", TargetKind::Executable, "", tree).with_filters(filters);

        let files = collect_files(&target, &config(".."));
        let compiled: Vec<_> = files
            .iter()
            .filter(|f| f.is_compiled())
            .map(|f| f.path.as_str())
            .collect();

        assert_eq!(files.len(), 3);
        assert_eq!(compiled, ["../a.cpp"]);
        assert_eq!(files[1].kind, FileKind::Resource);
        assert_eq!(files[2].kind, FileKind::Assembly);
    }
}
