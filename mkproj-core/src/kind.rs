//! File classification by extension.

use std::fmt;

use crate::path::split_extension;

/// Category of a file inside a module, derived from its extension.
///
/// Categorization is shared by every backend; each provider decides how
/// (or whether) a category is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// C, C++ and Objective-C sources and headers
    Source,
    /// Windows resource scripts (`.rc`)
    Resource,
    /// Raw assembly (`.asm`, `.s`, `.nasm`)
    Assembly,
    /// Anything else
    Other,
}

const SOURCE_EXTENSIONS: &[&str] = &[
    "c", "cc", "cpp", "cxx", "c++", "m", "mm", "h", "hh", "hpp", "hxx", "h++", "inl",
];

const ASSEMBLY_EXTENSIONS: &[&str] = &["asm", "s", "nasm"];

impl FileKind {
    /// Classify a file by the extension of its name (case-insensitive).
    pub fn from_file_name(name: &str) -> Self {
        let (_, ext) = split_extension(name);
        let ext = ext.to_ascii_lowercase();

        if ext == "rc" {
            FileKind::Resource
        } else if ASSEMBLY_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Assembly
        } else if SOURCE_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Source
        } else {
            FileKind::Other
        }
    }

    /// Returns the category name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Source => "source",
            FileKind::Resource => "resource",
            FileKind::Assembly => "assembly",
            FileKind::Other => "other",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
