//! Include/exclude filter rules applied to module files.

use std::fmt;

pub use glob::PatternError;
use glob::MatchOptions;

use crate::path::canonicalize_separators;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A single filter pattern.
///
/// Patterns containing glob metacharacters (`*`, `?`, `[`) are globs;
/// everything else is a path fragment.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Glob matched against the module-relative path, or against the bare
    /// file name when the pattern contains no `/`.
    Glob(glob::Pattern),
    /// Path fragment matching the whole path, a trailing suffix or a
    /// leading directory, always on `/` boundaries.
    Fragment(String),
}

impl Pattern {
    /// Parse a pattern, canonicalizing its separators.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let canonical = canonicalize_separators(pattern);
        let canonical = canonical.trim_start_matches("./").to_string();

        if canonical.contains(['*', '?', '[']) {
            Ok(Pattern::Glob(glob::Pattern::new(&canonical)?))
        } else {
            Ok(Pattern::Fragment(canonical))
        }
    }

    /// Check whether a canonical module-relative path matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::Glob(glob) => {
                if glob.as_str().contains('/') {
                    glob.matches_with(path, MATCH_OPTIONS)
                } else {
                    let file_name = path.rsplit('/').next().unwrap_or(path);
                    glob.matches_with(file_name, MATCH_OPTIONS)
                }
            }
            Pattern::Fragment(fragment) => {
                if fragment.is_empty() {
                    return false;
                }
                path == fragment
                    || path
                        .strip_suffix(fragment.as_str())
                        .is_some_and(|rest| rest.ends_with('/'))
                    || path
                        .strip_prefix(fragment.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }

    /// Get the pattern text.
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Glob(glob) => glob.as_str(),
            Pattern::Fragment(fragment) => fragment,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of filtering a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Included,
    Excluded,
}

/// Ordered include and exclude pattern lists for one target.
///
/// An exclude match always wins. Without include patterns every file not
/// excluded is included.
#[derive(Debug, Clone, Default)]
pub struct FilterRules {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl FilterRules {
    /// Create empty rules (include everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build rules from pattern strings.
    pub fn from_patterns<I, E, S, T>(include: I, exclude: E) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Ok(Self {
            include: include
                .into_iter()
                .map(|p| Pattern::new(p.as_ref()))
                .collect::<Result<_, _>>()?,
            exclude: exclude
                .into_iter()
                .map(|p| Pattern::new(p.as_ref()))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Classify a module-relative file path.
    pub fn classify(&self, path: &str) -> Classification {
        let path = canonicalize_separators(path);

        if self.exclude.iter().any(|p| p.matches(&path)) {
            return Classification::Excluded;
        }

        if self.include.is_empty() || self.include.iter().any(|p| p.matches(&path)) {
            Classification::Included
        } else {
            Classification::Excluded
        }
    }

    /// Shortcut for `classify(path) == Classification::Included`.
    pub fn is_included(&self, path: &str) -> bool {
        self.classify(path) == Classification::Included
    }
}
