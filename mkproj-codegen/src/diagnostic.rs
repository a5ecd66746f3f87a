//! Non-fatal messages collected during a generation run.
//!
//! Fatal problems are [`Error`](crate::Error)s; everything the caller should
//! hear about after the run (unsupported options, skipped files) is a
//! [`Diagnostic`].

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A requested option could not be honored.
    Warning,
    /// Informational message about the generation process.
    Info,
}

impl Severity {
    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message produced by the driver or a provider.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// Who produced it (provider name or "driver").
    pub origin: String,
    /// The diagnostic message.
    pub message: String,
    /// Optional location in the build description (e.g., "target.sky").
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            origin: origin.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create a new info diagnostic.
    pub fn info(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            origin: origin.into(),
            message: message.into(),
            location: None,
        }
    }

    /// A backend was asked for something it cannot express.
    pub fn unsupported_feature(backend: &str, feature: &str, detail: impl Into<String>) -> Self {
        Self::warning(
            backend,
            format!(
                "unsupported feature '{}' in the {} backend: {}",
                feature,
                backend,
                detail.into()
            ),
        )
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
