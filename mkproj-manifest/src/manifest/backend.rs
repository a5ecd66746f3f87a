//! Build-system backends a manifest can select.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported output backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// A single CMakeLists.txt
    #[default]
    CMake,
    /// A Code::Blocks workspace with one project per target
    CodeBlocks,
}

impl Backend {
    /// All backends, in display order.
    pub const ALL: [Backend; 2] = [Backend::CMake, Backend::CodeBlocks];

    /// Returns the backend identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::CMake => "cmake",
            Backend::CodeBlocks => "codeblocks",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cmake" => Ok(Backend::CMake),
            "codeblocks" | "code-blocks" | "cb" => Ok(Backend::CodeBlocks),
            _ => Err(format!(
                "unknown backend '{}', expected 'cmake' or 'codeblocks'",
                s
            )),
        }
    }
}
