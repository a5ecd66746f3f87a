//! Turn a parsed manifest into the build model the providers consume.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use mkproj_codegen_cmake::CMAKE_LISTS;
use mkproj_codegen_codeblocks::{CodeBlocksProvider, Provider, WORKSPACE_EXTENSION};
use mkproj_core::{BuildConfig, Target, canonicalize_separators};
use mkproj_manifest::ProjectToml;
use tracing::debug;

use super::scan_module;

/// A manifest resolved against the file system.
#[derive(Debug)]
pub struct Project {
    pub config: BuildConfig,
    pub targets: Vec<Target>,
}

/// Resolve paths, scan every target's module directory and build the
/// target list in manifest order.
///
/// The manifest file and anything a previous run generated are left out of
/// the scan, so generating twice gives the same output.
pub fn load(file: &ProjectToml, output_dir: &Path) -> Result<Project> {
    let manifest = file.manifest();

    let source_root = resolve(&file.source_root()).wrap_err("Failed to resolve the source root")?;
    let output_dir = resolve(output_dir).wrap_err("Failed to resolve the output directory")?;
    let generated = Generated {
        manifest: resolve(file.path()).wrap_err("Failed to resolve the manifest path")?,
        output_dir: output_dir.clone(),
    };

    let config = BuildConfig {
        file_prefix: file_prefix(&source_root, &output_dir),
        output_dir,
        source_root: source_root.clone(),
        ..manifest.build_config()
    };
    debug!(prefix = %config.file_prefix, "resolved file prefix");

    let mut targets = Vec::with_capacity(manifest.targets.len());
    for target in &manifest.targets {
        let module_path = target.module_path().unwrap_or_default();
        let dir = resolve(&source_root.join(&module_path))
            .wrap_err_with(|| format!("Failed to resolve the module of target '{}'", target.name))?;
        let tree = scan_module(&dir, |path| generated.contains(path))
            .wrap_err_with(|| format!("Failed to scan target '{}'", target.name))?;
        debug!(target = %target.name, files = tree.file_count(), "scanned module");

        let target = target
            .to_target(tree)
            .map_err(|e| eyre!("invalid pattern in target '{}': {}", target.name, e.msg))?;
        targets.push(target);
    }

    Ok(Project { config, targets })
}

/// Files a scan must skip: the manifest and the output of earlier runs.
struct Generated {
    manifest: PathBuf,
    output_dir: PathBuf,
}

impl Generated {
    fn contains(&self, path: &Path) -> bool {
        if path == self.manifest || path == self.output_dir {
            return true;
        }
        path.parent() == Some(self.output_dir.as_path())
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(is_artifact_name)
    }
}

/// Whether a file name is one a backend writes.
fn is_artifact_name(name: &str) -> bool {
    name == CMAKE_LISTS
        || name.ends_with(CodeBlocksProvider.file_extension())
        || name.ends_with(WORKSPACE_EXTENSION)
}

/// Absolute, symlink-free form of `path`.
///
/// Only the longest existing ancestor is canonicalized, so the output
/// directory may not exist yet.
fn resolve(path: &Path) -> std::io::Result<PathBuf> {
    let path = std::path::absolute(path)?;
    if path.exists() {
        return path.canonicalize();
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => Ok(resolve(parent)?.join(name)),
        _ => Ok(path),
    }
}

/// Path from the output directory to the source root, `/`-separated.
///
/// Empty when both are the same directory. Falls back to the absolute
/// source root when no relative path exists (different drives).
fn file_prefix(source_root: &Path, output_dir: &Path) -> String {
    let relative = pathdiff::diff_paths(source_root, output_dir)
        .unwrap_or_else(|| PathBuf::from(source_root));
    canonicalize_separators(&relative.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_prefix() {
        assert_eq!(
            file_prefix(Path::new("/work/scummvm"), Path::new("/work/scummvm/dists/cmake")),
            "../.."
        );
        assert_eq!(file_prefix(Path::new("/work/src"), Path::new("/work/src")), "");
        assert_eq!(file_prefix(Path::new("/work/src"), Path::new("/work")), "src");
    }

    #[test]
    fn test_load_scans_targets_in_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("engines/sky")).unwrap();
        fs::write(root.join("main.cpp"), "").unwrap();
        fs::write(root.join("engines/sky/sky.cpp"), "").unwrap();
        fs::write(
            root.join("mkproj.toml"),
            r#"
[project]
name = "demo"

[[target]]
name = "demo"
kind = "executable"
exclude = ["engines/**"]

[[target]]
name = "sky"
kind = "library"
path = "engines/sky"
"#,
        )
        .unwrap();

        let file = ProjectToml::open(root.join("mkproj.toml")).unwrap();
        let project = load(&file, &root.join("build")).unwrap();

        assert_eq!(project.config.project_name, "demo");
        assert_eq!(project.config.file_prefix, "..");
        let names: Vec<_> = project.targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["demo", "sky"]);
        assert_eq!(project.targets[0].tree.files(&project.targets[0].filters).len(), 1);
        assert_eq!(project.targets[1].module_path, "engines/sky");
    }

    #[test]
    fn test_generated_files_are_not_scanned() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("build")).unwrap();
        fs::write(root.join("main.cpp"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        for name in ["CMakeLists.txt", "demo.cbp", "demo.workspace"] {
            fs::write(root.join(name), "").unwrap();
        }
        fs::write(root.join("build/CMakeLists.txt"), "").unwrap();
        fs::write(
            root.join("mkproj.toml"),
            "[project]\nname = \"demo\"\n\n[[target]]\nname = \"demo\"\nkind = \"executable\"\n",
        )
        .unwrap();
        let file = ProjectToml::open(root.join("mkproj.toml")).unwrap();

        let files = |project: Project| -> Vec<String> {
            let target = &project.targets[0];
            target.tree.files(&target.filters).into_iter().map(|(p, _)| p).collect()
        };

        // Output next to the manifest: artifacts there are skipped.
        let project = load(&file, root).unwrap();
        assert_eq!(files(project), ["main.cpp", "notes.txt", "build/CMakeLists.txt"]);

        // Output in a subdirectory: the whole directory is skipped, artifacts
        // elsewhere are ordinary files.
        let project = load(&file, &root.join("build")).unwrap();
        assert_eq!(
            files(project),
            ["CMakeLists.txt", "demo.cbp", "demo.workspace", "main.cpp", "notes.txt"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_missing_output_dir() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().canonicalize().unwrap();
        assert_eq!(resolve(&temp.path().join("a/b")).unwrap(), existing.join("a/b"));
    }
}
