use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "mkproj.toml");
/// ctx.validation_error("missing required field");
/// ctx.duplicate_target_error("sky", first, second);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid name error.
    pub fn invalid_name_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate target error.
    pub fn duplicate_target_error(
        &self,
        name: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateTarget {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
        })
    }

    /// Create an executable count error.
    pub fn executable_count_error(&self, count: usize, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::ExecutableCount {
            src: self.named_source(),
            span,
            count,
        })
    }

    /// Create an invalid pattern error.
    pub fn invalid_pattern_error(
        &self,
        pattern: impl Into<String>,
        target: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPattern {
            src: self.named_source(),
            span,
            pattern: pattern.into(),
            target: target.into(),
            reason: reason.into(),
        })
    }

    /// Create a path-outside-root error.
    pub fn path_outside_root_error(
        &self,
        path: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::PathOutsideRoot {
            src: self.named_source(),
            span,
            path: path.into(),
            context: context.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create an mkproj.toml or point to one with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mkproj.toml")]
    #[diagnostic(code(mkproj::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(mkproj::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(mkproj::invalid_name),
        help(
            "{reason}. Names become file and target names: use letters, numbers, '_', '-' and '.'"
        )
    )]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate target '{name}'")]
    #[diagnostic(
        code(mkproj::duplicate_target),
        help("every [[target]] needs a unique name")
    )]
    DuplicateTarget {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("expected exactly one executable target, found {count}")]
    #[diagnostic(
        code(mkproj::executable_count),
        help("mark the main program with kind = \"executable\" and every other target as \"library\"")
    )]
    ExecutableCount {
        #[source_code]
        src: NamedSource<String>,
        #[label("executable declared here")]
        span: Option<SourceSpan>,
        count: usize,
    },

    #[error("invalid pattern '{pattern}' in target '{target}'")]
    #[diagnostic(code(mkproj::invalid_pattern), help("{reason}"))]
    InvalidPattern {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid pattern")]
        span: Option<SourceSpan>,
        pattern: String,
        target: String,
        reason: String,
    },

    #[error("{context} path '{path}' is outside the source root")]
    #[diagnostic(
        code(mkproj::path_outside_root),
        help("module paths are relative to 'source-root' and must not escape it")
    )]
    PathOutsideRoot {
        #[source_code]
        src: NamedSource<String>,
        #[label("outside the source root")]
        span: Option<SourceSpan>,
        path: String,
        context: String,
    },
}
