//! mkproj.toml parsing and validation.
//!
//! Errors carry the manifest source and a labelled span, so callers can
//! render them with `miette`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    Backend, MANIFEST_FILE, Manifest, ParseContext, ProjectConfig, ProjectToml, TargetConfig,
    parse_manifest,
};
