//! Error types for wedge file I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for wedge file I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing wedge and mesh files.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The buffer does not start with the `PWDG` signature.
    #[error("invalid signature: expected \"PWDG\", got {found:?}")]
    InvalidSignature {
        /// The four bytes found where the signature was expected.
        found: [u8; 4],
    },

    /// The version field names a layout this decoder does not understand.
    /// Future versions may extend the record layout, so unknown versions
    /// are rejected rather than decoded on a guess.
    #[error("unsupported wedge format version: {version}")]
    UnsupportedVersion {
        /// The version that was read.
        version: i32,
    },

    /// The wedge count field is negative.
    #[error("invalid wedge count: {count}")]
    InvalidCount {
        /// The count that was read.
        count: i32,
    },

    /// The buffer ended before the declared content was read.
    #[error("unexpected end of buffer: needed {needed} bytes, got {got}")]
    UnexpectedEof {
        /// Bytes required to finish decoding.
        needed: usize,
        /// Bytes actually available.
        got: usize,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from the standard library, propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error (ASCII STL).
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
