//! Module directory scanning.

use std::{io, path::Path};

use eyre::{Context, Result, bail};
use mkproj_core::FileNode;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Scan a module directory into a sorted file tree.
///
/// Hidden entries and every path `exclude` accepts are skipped, symlinks are
/// followed and directories without files never appear, so every node with
/// no children is a file. The root directory itself is never excluded.
pub fn scan_module(dir: &Path, exclude: impl Fn(&Path) -> bool) -> Result<FileNode> {
    if !dir.is_dir() {
        bail!("module directory '{}' does not exist", dir.display());
    }

    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());
    let mut root = FileNode::dir(name, Vec::new());

    let walker = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !(is_hidden(e) || exclude(e.path())));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.loop_ancestor().is_some() || is_dangling(&err) => {
                debug!(path = ?err.path(), error = %err, "skipped unreadable link");
                continue;
            }
            Err(err) => {
                return Err(err).wrap_err_with(|| {
                    format!("failed to scan module directory '{}'", dir.display())
                });
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        if !entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "skipped non-regular entry");
            continue;
        }

        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        let components: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        insert(&mut root, &components);
    }

    Ok(root.sorted())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_dangling(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

fn insert(node: &mut FileNode, components: &[String]) {
    match components {
        [] => {}
        [file] => node.children.push(FileNode::file(file.clone())),
        [dir, rest @ ..] => {
            let index = match node.children.iter().position(|c| c.name == *dir) {
                Some(index) => index,
                None => {
                    node.children.push(FileNode::dir(dir.clone(), Vec::new()));
                    node.children.len() - 1
                }
            };
            insert(&mut node.children[index], rest);
        }
    }
}
