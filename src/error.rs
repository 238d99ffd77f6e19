//! Error types for docshape.

use std::io;
use thiserror::Error;

/// Result type alias for docshape operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around a document parse.
///
/// The segmentation pass itself never fails: malformed schema pieces and
/// unparseable lines fall back to permissive defaults. Errors arise only at
/// the boundary, when inputs cannot be produced or output cannot be written.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A document source failed to produce the paragraph sequence.
    #[error("failed to load document '{document}': {reason}")]
    Source {
        /// Identity of the document that was requested
        document: String,
        /// Root cause reported by the source
        reason: String,
    },

    /// A schema file could not be deserialized.
    #[error("invalid schema: {0}")]
    Schema(String),

    /// Raw block data could not be deserialized.
    #[error("invalid block data: {0}")]
    Blocks(String),

    /// Error serializing parse output.
    #[error("rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap a source failure with the attempted document identity.
    pub fn source(document: impl Into<String>, reason: impl ToString) -> Self {
        Self::Source {
            document: document.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::source("resume-2024", "connection refused");
        assert_eq!(
            err.to_string(),
            "failed to load document 'resume-2024': connection refused"
        );

        let err = Error::Schema("expected value at line 1".into());
        assert_eq!(err.to_string(), "invalid schema: expected value at line 1");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
