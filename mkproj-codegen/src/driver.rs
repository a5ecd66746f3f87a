//! Runs a provider over a complete build description.

use std::{collections::HashSet, path::PathBuf};

use mkproj_core::{
    BuildConfig, IdentifierRegistry, Target, TargetId, is_absolute_path, module_relative_path,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::{Diagnostic, Error, Output, Provider, Result};

/// Outcome of a successful generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Backend that produced the artifacts
    pub provider: String,
    /// Written artifact paths, primary artifact first
    pub artifacts: Vec<PathBuf>,
    /// Registry snapshot in registration order
    pub targets: Vec<(String, TargetId)>,
    /// Non-fatal messages collected during the run
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }
}

/// Check a build description before any file is opened.
pub fn validate(config: &BuildConfig, targets: &[Target]) -> Result<()> {
    if config.project_name.trim().is_empty() {
        return Err(Error::configuration("project name must not be empty"));
    }

    let executables: Vec<&str> = targets
        .iter()
        .filter(|t| t.is_executable())
        .map(|t| t.name.as_str())
        .collect();
    if executables.len() != 1 {
        return Err(Error::configuration(format!(
            "expected exactly one executable target, found {}{}",
            executables.len(),
            if executables.is_empty() {
                String::new()
            } else {
                format!(" ({})", executables.join(", "))
            }
        )));
    }

    let mut seen = HashSet::new();
    for target in targets {
        if target.name.trim().is_empty() {
            return Err(Error::configuration("target name must not be empty"));
        }
        if !seen.insert(target.name.as_str()) {
            return Err(Error::configuration(format!(
                "duplicate target name '{}'",
                target.name
            )));
        }
        if is_absolute_path(&target.module_path)
            || module_relative_path("", &target.module_path).is_none()
        {
            return Err(Error::configuration(format!(
                "module path '{}' of target '{}' is outside the source root",
                target.module_path, target.name
            )));
        }
    }

    Ok(())
}

/// Generate every artifact for `targets` through `provider`.
///
/// Targets are registered up front in caller order, so the executable can
/// link libraries declared after it. Nothing is written when validation
/// fails; any write failure aborts the run.
pub fn generate(
    provider: &dyn Provider,
    config: &BuildConfig,
    targets: &[Target],
    output: &Output,
) -> Result<GenerationReport> {
    validate(config, targets)?;

    info!(
        provider = provider.name(),
        project = %config.project_name,
        targets = targets.len(),
        "generating project files"
    );

    let mut registry = IdentifierRegistry::new();
    for target in targets {
        registry.register(&target.name);
    }

    let mut diagnostics = Vec::new();
    let mut workspace = provider.open_workspace(output, config)?;

    for target in targets {
        if !target.warnings.is_empty() && !provider.supports_target_warnings() {
            diagnostics.push(
                Diagnostic::unsupported_feature(
                    provider.name(),
                    "per-target warnings",
                    format!("ignored {}", target.warnings.join(" ")),
                )
                .at(format!("target.{}", target.name)),
            );
        }

        let id = provider.add_target(&mut workspace, target, &mut registry, config)?;
        debug!(target = %target.name, kind = %target.kind, %id, "added target");
    }

    diagnostics.extend(workspace.take_diagnostics());
    let artifacts = provider.close_workspace(workspace, &registry, config)?;

    for path in &artifacts {
        debug!(path = %path.display(), "wrote artifact");
    }

    Ok(GenerationReport {
        provider: provider.name().to_string(),
        artifacts,
        targets: registry
            .lookup_all()
            .map(|(name, id)| (name.to_string(), id))
            .collect(),
        diagnostics,
    })
}
