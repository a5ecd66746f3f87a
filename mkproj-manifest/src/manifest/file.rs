use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "mkproj.toml";

/// Represents an mkproj.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct ProjectToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ProjectToml {
    /// Open and parse an mkproj.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the manifest.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// The source root, resolved against the manifest's directory.
    pub fn source_root(&self) -> PathBuf {
        self.dir().join(&self.manifest.project.source_root)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_and_resolve() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);
        std::fs::write(
            &path,
            "[project]\nname = \"demo\"\nsource-root = \"src\"\n\n[[target]]\nname = \"demo\"\nkind = \"executable\"\n",
        )
        .unwrap();

        let file = ProjectToml::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.dir(), temp.path());
        assert_eq!(file.source_root(), temp.path().join("src"));
        assert!(file.content().contains("[project]"));
        assert_eq!(file.manifest().project.name, "demo");
    }

    #[test]
    fn test_bare_file_name_resolves_to_current_dir() {
        let file = ProjectToml {
            path: PathBuf::from(MANIFEST_FILE),
            content: String::new(),
            manifest: "[project]\nname = \"x\"\n\n[[target]]\nname = \"x\"\nkind = \"executable\"\n"
                .parse()
                .unwrap(),
        };
        assert_eq!(file.dir(), Path::new("."));
        assert_eq!(file.source_root(), Path::new("./."));
    }
}
