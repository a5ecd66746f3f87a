//! Provider contract and shared emission utilities for mkproj.
//!
//! This crate sits between the backend-independent model in `mkproj-core`
//! and the backend crates (e.g., `mkproj-codegen-cmake`).
//!
//! # Module Organization
//!
//! - [`builder`] - Tab-indented text building (CodeBuilder)
//! - [`Provider`] - The backend contract
//! - [`generate`] - The driver running a provider over a build description
//! - [`Output`] / [`Workspace`] - Artifact sinks and open run state
//! - [`testing`] - Test fixtures (feature-gated)

pub mod builder;
mod diagnostic;
mod driver;
mod error;
mod files;
mod naming;
mod output;
mod provider;
mod workspace;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use diagnostic::{Diagnostic, Severity};
pub use driver::{GenerationReport, generate, validate};
pub use error::{Error, Result};
pub use files::{SourceFile, collect_files, module_prefix};
pub use naming::normalize_library_name;
pub use output::{Artifact, Output, PreviewFile};
pub use provider::Provider;
pub use workspace::Workspace;
