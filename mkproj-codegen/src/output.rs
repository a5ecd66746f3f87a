//! Output sinks for generated artifacts.
//!
//! An [`Output`] hands out [`Artifact`]s: buffered writers bound to one
//! generated file. Artifacts flush when finished and on drop, so an early
//! error never leaves a handle open.

use std::{
    cell::RefCell,
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    rc::Rc,
};

use indexmap::IndexMap;

use crate::{Error, Result, builder::CodeBuilder};

type PreviewStore = Rc<RefCell<IndexMap<String, Vec<u8>>>>;

/// Where generated artifacts go.
#[derive(Debug, Clone)]
pub enum Output {
    /// Files under a directory on disk.
    Disk { root: PathBuf },
    /// In-memory files, for dry runs and tests.
    Preview { files: PreviewStore },
}

/// A generated file captured by a preview output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
}

#[derive(Debug, Clone, Copy)]
enum OpenMode {
    Truncate,
    Append,
}

impl Output {
    /// Write artifacts below `root`, creating it when needed.
    pub fn disk(root: impl Into<PathBuf>) -> Self {
        Output::Disk { root: root.into() }
    }

    /// Capture artifacts in memory.
    pub fn preview() -> Self {
        Output::Preview {
            files: Rc::new(RefCell::new(IndexMap::new())),
        }
    }

    /// Create (or truncate) an artifact.
    pub fn create(&self, name: &str) -> Result<Artifact> {
        self.open(name, OpenMode::Truncate)
    }

    /// Open an artifact for appending, creating it when missing.
    pub fn append(&self, name: &str) -> Result<Artifact> {
        self.open(name, OpenMode::Append)
    }

    /// Full path an artifact name resolves to.
    pub fn path_of(&self, name: &str) -> PathBuf {
        match self {
            Output::Disk { root } => root.join(name),
            Output::Preview { .. } => PathBuf::from(name),
        }
    }

    /// Files captured so far, in creation order (empty for disk output).
    pub fn preview_files(&self) -> Vec<PreviewFile> {
        match self {
            Output::Disk { .. } => Vec::new(),
            Output::Preview { files } => files
                .borrow()
                .iter()
                .map(|(path, content)| PreviewFile {
                    path: path.clone(),
                    content: String::from_utf8_lossy(content).into_owned(),
                })
                .collect(),
        }
    }

    fn open(&self, name: &str, mode: OpenMode) -> Result<Artifact> {
        let path = self.path_of(name);

        let writer: Box<dyn Write> = match self {
            Output::Disk { .. } => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
                }
                let mut options = OpenOptions::new();
                options.create(true);
                match mode {
                    OpenMode::Truncate => options.write(true).truncate(true),
                    OpenMode::Append => options.append(true),
                };
                let file = options.open(&path).map_err(|e| Error::io(&path, e))?;
                Box::new(file)
            }
            Output::Preview { files } => {
                let mut store = files.borrow_mut();
                let entry = store.entry(name.to_string()).or_default();
                if matches!(mode, OpenMode::Truncate) {
                    entry.clear();
                }
                Box::new(PreviewWriter {
                    name: name.to_string(),
                    files: Rc::clone(files),
                })
            }
        };

        tracing::debug!(path = %path.display(), ?mode, "opened artifact");
        Ok(Artifact {
            path,
            writer: BufWriter::new(writer),
        })
    }
}

struct PreviewWriter {
    name: String,
    files: PreviewStore,
}

impl Write for PreviewWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.files
            .borrow_mut()
            .entry(self.name.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// One open generated file.
pub struct Artifact {
    path: PathBuf,
    writer: BufWriter<Box<dyn Write>>,
}

impl Artifact {
    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append text.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(|e| Error::io(&self.path, e))
    }

    /// Append everything a builder produced.
    pub fn emit(&mut self, code: CodeBuilder) -> Result<()> {
        self.write_str(&code.build())
    }

    /// Flush and close, returning the artifact path.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush().map_err(|e| Error::io(&self.path, e))?;
        Ok(self.path)
    }
}

impl std::fmt::Debug for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifact").field("path", &self.path).finish()
    }
}
