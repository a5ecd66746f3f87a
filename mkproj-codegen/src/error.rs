use std::path::PathBuf;

use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal generation errors.
///
/// Any of these aborts the whole run; rerunning after fixing the cause is
/// the only recovery.
#[derive(Debug, Error)]
pub enum Error {
    /// An artifact could not be created, opened or written.
    #[error("could not open '{path}' for writing")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build description is unusable; detected before any file is opened.
    #[error("invalid configuration: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
