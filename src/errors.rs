/*!
 * Error types for the ttaf2vtt library.
 *
 * Every fallible library operation returns [`WebVttError`]. The application
 * layer (controller and binary) wraps these in `anyhow` with extra context.
 */

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, WebVttError>;

/// Errors raised while building, converting or writing WebVTT content
#[derive(Error, Debug)]
pub enum WebVttError {
    /// A cue field failed its format or keyword contract
    #[error("Validation error: {0}")]
    Validation(String),

    /// A source timestamp could not be normalized
    #[error("Time format error: {0}")]
    Format(String),

    /// The source document is not usable XML
    #[error("Invalid XML: {0}")]
    Xml(String),

    /// A file system operation failed
    #[error("I/O error for {path:?}: {message}")]
    Io {
        /// Path the operation was working on (may be empty)
        path: PathBuf,
        /// Underlying failure description
        message: String,
    },

    /// The operation is declared but not supported
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl WebVttError {
    /// Build an I/O error tied to a path
    pub fn io<P: AsRef<Path>>(path: P, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Whether this error only affects a single cue during conversion
    pub fn is_cue_level(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Format(_))
    }
}

impl From<std::io::Error> for WebVttError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::new(),
            message: error.to_string(),
        }
    }
}

impl From<roxmltree::Error> for WebVttError {
    fn from(error: roxmltree::Error) -> Self {
        Self::Xml(error.to_string())
    }
}
