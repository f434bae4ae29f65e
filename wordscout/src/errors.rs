//! Error types for wordscout.
//!
//! Only one class of failure exists at the scanning layer: a file that cannot be
//! opened, read or decoded. Those errors never leave the unit of work that hit
//! them; the scanners log them and move on. The enum is still explicit so that
//! callers of the per-file helpers can match on what went wrong:
//! ```rust,ignore
//! match read_text(path) {
//!     Ok(content) => // scan content,
//!     Err(ScanError::FileNotFound(path)) => // missing file,
//!     Err(ScanError::EncodingError { path, .. }) => // not UTF-8,
//!     Err(e) => // anything else
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while scanning a file
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Invalid UTF-8 in file {path}: {source}")]
    EncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Worker scanning {0} panicked")]
    WorkerPanicked(PathBuf),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ScanError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn encoding_error(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::EncodingError {
            path: path.into(),
            source,
        }
    }

    pub fn worker_panicked(path: impl Into<PathBuf>) -> Self {
        Self::WorkerPanicked(path.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<config::ConfigError> for ScanError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}
