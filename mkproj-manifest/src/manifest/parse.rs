//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use mkproj_core::Pattern;

use super::{
    Manifest,
    validate::{ParseContext, find_string_span},
};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "mkproj.toml")
    }
}

impl Manifest {
    /// Parse an mkproj.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse an mkproj.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let source = ctx.source_context();

    ctx.validate_name(&manifest.project.name, "project", 0)?;

    // Occurrence counters keep spans pointing at the right `name = ...` line
    // when a target shares its name with the project or another target.
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    occurrences.insert(manifest.project.name.as_str(), 1);
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for target in &manifest.targets {
        let name = target.name.as_str();
        let nth = *occurrences.get(name).unwrap_or(&0);
        occurrences.insert(name, nth + 1);

        ctx.validate_name(name, "target", nth)?;

        if let Some(first) = first_seen.get(name) {
            return Err(source.duplicate_target_error(
                name,
                ctx.find_span("name", name, *first),
                ctx.find_span("name", name, nth),
            ));
        }
        first_seen.insert(name, nth);

        if target.module_path().is_none() {
            return Err(source.path_outside_root_error(
                &target.path,
                format!("target '{}'", name),
                ctx.find_span("path", &target.path, 0),
            ));
        }

        let target_ctx = ctx.push(name);
        for pattern in target.include.iter().chain(&target.exclude) {
            if let Err(e) = Pattern::new(pattern) {
                return Err(source.invalid_pattern_error(
                    pattern,
                    name,
                    format!("{} ({})", e.msg, target_ctx.context_for("pattern")),
                    find_string_span(src, pattern, 0),
                ));
            }
        }
    }

    let executables = manifest
        .targets
        .iter()
        .filter(|t| t.kind.is_executable())
        .count();
    if executables != 1 {
        let span = if executables > 1 {
            ctx.find_span("kind", "executable", 1)
        } else {
            None
        };
        return Err(source.executable_count_error(executables, span));
    }

    for dir in &manifest.project.include_dirs {
        if mkproj_core::is_absolute_path(dir)
            || mkproj_core::module_relative_path("", dir).is_none()
        {
            return Err(source.path_outside_root_error(
                dir,
                "include directory",
                find_string_span(src, dir, 0),
            ));
        }
    }

    Ok(())
}
