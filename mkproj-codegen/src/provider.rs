//! The backend contract.

use std::path::PathBuf;

use mkproj_core::{BuildConfig, IdentifierRegistry, Target, TargetId};

use crate::{Artifact, Output, Result, Workspace};

/// A build-system backend.
///
/// A run goes through `open_workspace`, any number of `add_target` calls and
/// a single `close_workspace`. The [`Workspace`] value carries the open
/// state, so the sequence is enforced by ownership. Implementors keep no
/// state of their own between calls; everything shared lives in the
/// workspace, the registry or the configuration.
pub trait Provider {
    /// Backend identifier (e.g., "cmake", "codeblocks")
    fn name(&self) -> &'static str;

    /// Canonical artifact suffix including the dot (e.g., ".txt", ".cbp")
    fn file_extension(&self) -> &'static str;

    /// Whether per-target warning flags can be expressed.
    fn supports_target_warnings(&self) -> bool {
        false
    }

    /// Create the top-level artifact and write the global header, warning
    /// and define blocks.
    fn open_workspace(&self, output: &Output, config: &BuildConfig) -> Result<Workspace>;

    /// Append one target declaration.
    ///
    /// Implementations start with [`Workspace::begin_target`], which
    /// registers the target and records it in the workspace.
    fn add_target(
        &self,
        workspace: &mut Workspace,
        target: &Target,
        registry: &mut IdentifierRegistry,
        config: &BuildConfig,
    ) -> Result<TargetId>;

    /// Write any trailing cross-reference section and flush everything.
    ///
    /// Returns the written artifact paths, primary artifact first.
    fn close_workspace(
        &self,
        workspace: Workspace,
        _registry: &IdentifierRegistry,
        _config: &BuildConfig,
    ) -> Result<Vec<PathBuf>> {
        workspace.finish()
    }

    /// Write a warning block, one flag per entry in input order.
    fn write_warnings(&self, warnings: &[String], artifact: &mut Artifact) -> Result<()>;

    /// Write a define block, one `-D<define>` per entry in input order.
    fn write_defines(&self, defines: &[String], artifact: &mut Artifact) -> Result<()>;
}
