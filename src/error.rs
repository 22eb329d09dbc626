//! Error types for the unresume library.
//!
//! The structuring engine itself never fails; these errors belong to the
//! boundary around it (reading sources, detecting formats, rendering output).

use std::io;
use thiserror::Error;

/// Result type alias for unresume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around resume structuring.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source format is not one any registered extractor handles.
    #[error("Unsupported file type: {0}. Please provide a PDF, DOCX, or TXT file.")]
    UnsupportedFormat(String),

    /// The source bytes could not be decoded into text.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Error during rendering (JSON, text outline).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat("odt".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported file type: odt. Please provide a PDF, DOCX, or TXT file."
        );

        let err = Error::Decode("empty input".to_string());
        assert_eq!(err.to_string(), "Decode error: empty input");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
