//! Core types for the mkproj project generator.
//!
//! This crate provides the backend-independent model every provider works
//! from: the module file tree, filter rules, file classification, the
//! identifier registry and the target/build configuration descriptors.

mod filter;
mod kind;
mod path;
mod registry;
mod target;
mod tree;
mod version;

// Filtering
pub use filter::{Classification, FilterRules, Pattern, PatternError};
// File classification
pub use kind::FileKind;
// Path utilities
pub use path::{
    canonicalize_separators, is_absolute_path, join_path, module_relative_path, split_extension,
};
// Identifier registry
pub use registry::{IdentifierRegistry, TargetId};
// Build model
pub use target::{BuildConfig, Target, TargetKind};
// File tree
pub use tree::FileNode;
pub use version::Version;
