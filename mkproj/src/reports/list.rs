//! List command report data structures.

use mkproj_core::FileKind;

use super::output::{Output, Report};

/// Every target's filtered file list.
#[derive(Debug)]
pub struct ListReport {
    pub targets: Vec<TargetFiles>,
}

/// Files of one target, paths relative to the module root.
#[derive(Debug)]
pub struct TargetFiles {
    pub name: String,
    pub files: Vec<(String, FileKind)>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!("{} ({})", target.name, target.files.len()));
            if target.files.is_empty() {
                out.preformatted("  (no files)");
            }
            for (path, kind) in &target.files {
                out.list_item(&format!("{:<8} {}", kind.as_str(), path));
            }
        }
    }
}
