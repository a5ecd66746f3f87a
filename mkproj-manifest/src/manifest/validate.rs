//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "mkproj.toml");
/// ctx.validate_name("scummvm", "project")?;
///
/// let target = ctx.push("sky");
/// target.validate_name("sky", "target")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["target", "sky"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "target in 'sky'" or just "target" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Span of the `nth` (0-based) `key = "value"` entry in the source.
    pub fn find_span(&self, key: &str, value: &str, nth: usize) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value, nth)
    }

    /// Validate that a name can be used as a file and build-target name.
    pub fn validate_name(&self, name: &str, kind: &str, nth: usize) -> Result<()> {
        if let Some(reason) = validate_name(name) {
            return Err(self.source.invalid_name_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span("name", name, nth),
            ));
        }
        Ok(())
    }
}

/// Find the span of the `nth` (0-based) `key = "value"` (or `'value'`) line
/// in the TOML source, covering the value without quotes.
pub(crate) fn find_value_span(
    src: &str,
    key: &str,
    value: &str,
    nth: usize,
) -> Option<SourceSpan> {
    let mut offset = 0;
    let mut seen = 0;

    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        if let Some(rest) = trimmed.strip_prefix(key) {
            let after_key = rest.trim_start();
            if let Some(after_eq) = after_key.strip_prefix('=') {
                let value_part = after_eq.trim_start();
                let matches = [('"', '"'), ('\'', '\'')].iter().any(|(open, close)| {
                    value_part.starts_with(*open)
                        && value_part[1..].starts_with(value)
                        && value_part[1 + value.len()..].starts_with(*close)
                });

                if matches {
                    if seen == nth {
                        let start = offset + indent + (trimmed.len() - value_part.len()) + 1;
                        return Some(SourceSpan::from((start, value.len())));
                    }
                    seen += 1;
                }
            }
        }

        offset += line.len();
    }

    None
}

/// Span of the `nth` (0-based) occurrence of a quoted string anywhere in the
/// source, covering the string without quotes.
pub(crate) fn find_string_span(src: &str, value: &str, nth: usize) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.match_indices(&quoted)
        .nth(nth)
        .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
}

/// Validate that a name is usable as an artifact file name and build target.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        Some(_) => return Some("name must start with a letter, number or underscore"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')) {
        return Some("name must contain only letters, numbers, underscores, dashes and dots");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("scummvm").is_none());
        assert!(validate_name("engine_lib").is_none());
        assert!(validate_name("sdl-backend").is_none());
        assert!(validate_name("2d").is_none());
        assert!(validate_name("lib.core").is_none());
    }

    #[test]
    fn test_invalid_names() {
        assert!(validate_name("").is_some());
        assert!(validate_name("-x").is_some());
        assert!(validate_name(".hidden").is_some());
        assert!(validate_name("with space").is_some());
        assert!(validate_name("a/b").is_some());
        assert!(validate_name("a\\b").is_some());
    }

    #[test]
    fn test_find_value_span() {
        let src = "[[target]]\nname = \"sky\"\n\n[[target]]\n  name='sky'\n";

        let first = find_value_span(src, "name", "sky", 0).unwrap();
        assert_eq!(&src[first.offset()..first.offset() + first.len()], "sky");
        assert_eq!(first.offset(), 19);

        let second = find_value_span(src, "name", "sky", 1).unwrap();
        assert_eq!(&src[second.offset()..second.offset() + second.len()], "sky");
        assert!(second.offset() > first.offset());

        assert!(find_value_span(src, "name", "sky", 2).is_none());
        assert!(find_value_span(src, "name", "sk", 0).is_none());
    }

    #[test]
    fn test_find_value_span_ignores_other_keys() {
        let src = "[project]\nname = \"demo\"\ndescription = \"demo\"\n";
        let span = find_value_span(src, "description", "demo", 0).unwrap();
        assert_eq!(span.offset(), src.rfind("demo").unwrap());
    }

    #[test]
    fn test_find_string_span() {
        let src = "exclude = [\"a/**\", \"[oops\"]\n";
        let span = find_string_span(src, "[oops", 0).unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "[oops");
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "mkproj.toml");
        assert_eq!(ctx.context_for("target"), "target");
        assert_eq!(ctx.push("target").push("sky").context_for("pattern"), "pattern in 'target.sky'");
    }
}
