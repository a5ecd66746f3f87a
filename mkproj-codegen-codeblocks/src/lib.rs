//! Code::Blocks backend for mkproj.
//!
//! Writes a `<project>.workspace` listing every project, with the executable
//! marked active and depending on each library, and one `<target>.cbp` per
//! target carrying its compiler options, linker settings and units.

mod provider;
mod xml;

pub use mkproj_codegen::{GenerationReport, Output, PreviewFile, Provider, generate};
pub use provider::{CodeBlocksProvider, WORKSPACE_EXTENSION};
pub use xml::escape_attr;
