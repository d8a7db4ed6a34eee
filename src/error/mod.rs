//! Error types for bytescan.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur during scanning operations.
///
/// A scan either fully completes and returns a result, or fails with one of
/// these kinds; there is no notion of a partially successful scan and no
/// retry.
#[derive(Debug)]
pub enum ScanError {
    /// An I/O error occurred while reading input data mid-scan.
    Io(std::io::Error),

    /// The file to scan does not exist or could not be opened.
    NotFound {
        /// The path that could not be opened.
        path: PathBuf,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The search pattern was rejected before any I/O occurred.
    InvalidPattern {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "io error: {}", e),
            ScanError::NotFound { path } => {
                write!(f, "file not found: {}", path.display())
            }
            ScanError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            ScanError::InvalidPattern { message } => {
                write!(f, "invalid pattern: {}", message)
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(e: std::io::Error) -> Self {
        ScanError::Io(e)
    }
}
