//! Hierarchical view of a module directory.

use crate::{
    filter::FilterRules,
    kind::FileKind,
    path::{canonicalize_separators, join_path},
};

/// A node in a module's file tree.
///
/// A node without children is a file; a node with children is a directory.
/// The tree is built once per module and only read during emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// File or directory name (no separators expected, but tolerated)
    pub name: String,
    /// Child nodes in traversal order
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// Create a file (leaf) node.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a directory node with the given children.
    pub fn dir(name: impl Into<String>, children: impl IntoIterator<Item = FileNode>) -> Self {
        Self {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.children.is_empty()
    }

    /// Count the files below this node (a file counts itself).
    pub fn file_count(&self) -> usize {
        if self.is_file() {
            1
        } else {
            self.children.iter().map(FileNode::file_count).sum()
        }
    }

    /// Return a copy with every directory's children ordered by name,
    /// files before directories.
    pub fn sorted(&self) -> Self {
        let mut children: Vec<FileNode> = self.children.iter().map(FileNode::sorted).collect();
        children.sort_by(|a, b| {
            b.is_file()
                .cmp(&a.is_file())
                .then_with(|| a.name.cmp(&b.name))
        });
        Self {
            name: self.name.clone(),
            children,
        }
    }

    /// Collect the filtered files below this node (the module root) in
    /// depth-first traversal order.
    ///
    /// The root's own name is not part of the produced paths. Directories
    /// are always entered; only files are filtered.
    pub fn files(&self, filters: &FilterRules) -> Vec<(String, FileKind)> {
        let mut files = Vec::new();
        collect_files(self, "", filters, &mut files);
        files
    }
}

fn collect_files(
    dir: &FileNode,
    prefix: &str,
    filters: &FilterRules,
    files: &mut Vec<(String, FileKind)>,
) {
    for node in &dir.children {
        let path = join_path(prefix, &canonicalize_separators(&node.name));

        if !node.is_file() {
            collect_files(node, &path, filters, files);
        } else if filters.is_included(&path) {
            files.push((path, FileKind::from_file_name(&node.name)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> FileNode {
        FileNode::dir(
            "module",
            [
                FileNode::file("b.cpp"),
                FileNode::dir("gfx", [FileNode::file("blit.cpp"), FileNode::file("blit.h")]),
                FileNode::file("a.cpp"),
                FileNode::file("icon.rc"),
            ],
        )
    }

    #[test]
    fn test_files_preserve_order_and_paths() {
        let files = sample_tree().files(&FilterRules::new());
        let paths: Vec<_> = files.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(
            paths,
            vec!["b.cpp", "gfx/blit.cpp", "gfx/blit.h", "a.cpp", "icon.rc"]
        );
        assert_eq!(files[4].1, FileKind::Resource);
    }

    #[test]
    fn test_filters_apply_to_leaves_only() {
        let filters = FilterRules::from_patterns(["gfx/blit.cpp"], ["*.h"]).unwrap();
        let files = sample_tree().files(&filters);
        let paths: Vec<_> = files.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["gfx/blit.cpp"]);
    }

    #[test]
    fn test_excluded_directory_contents() {
        let filters = FilterRules::from_patterns(Vec::<&str>::new(), ["a.cpp", "b.cpp"]).unwrap();
        assert_eq!(
            sample_tree().files(&filters),
            [
                ("gfx/blit.cpp".to_string(), FileKind::Source),
                ("gfx/blit.h".to_string(), FileKind::Source),
                ("icon.rc".to_string(), FileKind::Resource),
            ]
        );
    }

    #[test]
    fn test_mixed_separators_in_names_are_canonical() {
        let tree = FileNode::dir(
            "root",
            [FileNode::dir("engines\\scumm", [FileNode::file("actor.cpp")])],
        );
        let files = tree.files(&FilterRules::new());
        assert_eq!(files[0].0, "engines/scumm/actor.cpp");
    }

    #[test]
    fn test_sorted_puts_files_first() {
        let sorted = sample_tree().sorted();
        let names: Vec<_> = sorted.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a.cpp", "b.cpp", "icon.rc", "gfx"]);
    }

    #[test]
    fn test_file_count() {
        assert_eq!(sample_tree().file_count(), 5);
        assert!(FileNode::file("x.c").is_file());
    }
}
