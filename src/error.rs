//! Error types for auto-annotate.
//!
//! The annotation passes themselves never fail. These errors come from
//! building and loading term maps.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or loading term maps.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// A term key was the empty string
    #[error("term key must not be empty")]
    EmptyKey,

    /// A term key was inserted twice
    #[error("duplicate term key: {0:?}")]
    DuplicateKey(String),

    /// Term map text was not a JSON object of strings
    #[error("invalid term map: {0}")]
    Parse(#[from] serde_json::Error),

    /// Term map file was not a JSON object of strings
    #[error("invalid term map in {}: {source}", .path.display())]
    Json {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying decode error
        source: serde_json::Error,
    },

    /// Term map file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result type alias for term map operations.
pub type AnnotateResult<T> = Result<T, AnnotateError>;

impl AnnotateError {
    /// Create an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a decode error for a path.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnnotateError::DuplicateKey("Turing".to_string());
        assert_eq!(err.to_string(), "duplicate term key: \"Turing\"");

        let err = AnnotateError::EmptyKey;
        assert_eq!(err.to_string(), "term key must not be empty");

        let err = AnnotateError::io(
            "data/auto_links.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to read data/auto_links.json: denied");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnnotateError>();
    }
}
