//! The open state of a provider run.

use std::path::PathBuf;

use mkproj_core::{IdentifierRegistry, Target, TargetId, TargetKind};

use crate::{Artifact, Diagnostic, Output, Result};

/// An open workspace: the primary artifact plus everything written so far.
///
/// Returned by [`Provider::open_workspace`](crate::Provider::open_workspace),
/// borrowed mutably by `add_target` and consumed by `close_workspace`, so a
/// target can never be added to a closed workspace.
#[derive(Debug)]
pub struct Workspace {
    output: Output,
    primary: Artifact,
    artifacts: Vec<PathBuf>,
    diagnostics: Vec<Diagnostic>,
    targets: Vec<(String, TargetKind)>,
}

impl Workspace {
    /// Create the primary artifact (truncating) and wrap it.
    pub fn open(output: &Output, name: &str) -> Result<Self> {
        let primary = output.create(name)?;
        Ok(Self {
            output: output.clone(),
            primary,
            artifacts: Vec::new(),
            diagnostics: Vec::new(),
            targets: Vec::new(),
        })
    }

    /// The top-level artifact.
    pub fn primary(&mut self) -> &mut Artifact {
        &mut self.primary
    }

    /// Create a secondary artifact; its path is recorded once it is finished
    /// through [`Workspace::finish_artifact`].
    pub fn create_artifact(&self, name: &str) -> Result<Artifact> {
        self.output.create(name)
    }

    /// Flush a secondary artifact and record its path.
    pub fn finish_artifact(&mut self, artifact: Artifact) -> Result<()> {
        let path = artifact.finish()?;
        if !self.artifacts.contains(&path) {
            self.artifacts.push(path);
        }
        Ok(())
    }

    /// Register a target and note that it belongs to this workspace.
    ///
    /// Every `add_target` implementation starts here, so the workspace knows
    /// its targets no matter who drives the provider.
    pub fn begin_target(
        &mut self,
        target: &Target,
        registry: &mut IdentifierRegistry,
    ) -> TargetId {
        if !self.targets.iter().any(|(name, _)| *name == target.name) {
            self.targets.push((target.name.clone(), target.kind));
        }
        registry.register(&target.name)
    }

    /// Name of the executable target, once added.
    pub fn executable(&self) -> Option<&str> {
        self.targets
            .iter()
            .find(|(_, kind)| kind.is_executable())
            .map(|(name, _)| name.as_str())
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Drain the diagnostics collected so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Flush the primary artifact; returns every artifact path, primary first.
    pub fn finish(self) -> Result<Vec<PathBuf>> {
        let primary = self.primary.finish()?;
        let secondaries = self.artifacts.into_iter().filter(|p| *p != primary);
        Ok(std::iter::once(primary.clone()).chain(secondaries).collect())
    }
}
