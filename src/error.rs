//! Unified error types for align-tools.
//!
//! Configuration errors surface immediately with the offending key or value
//! named in the message; comparison itself is infallible once the inputs are
//! loaded, so the only runtime failure after configuration is writing the
//! report file.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for align-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AlignDiffError {
    /// Configuration errors (clashing exclusion/override keys, unparseable
    /// precedence values, malformed relocation properties)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A GAV or artifact reference string that could not be parsed
    #[error("Invalid coordinate '{value}': {reason}")]
    Coordinate { value: String, reason: String },

    /// The report output file could not be written.
    ///
    /// The report is written to the file before it is emitted to the log;
    /// this failure therefore aborts the whole emission.
    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A project-tree snapshot could not be loaded or decoded
    #[error("Failed to load snapshot {path}: {message}")]
    Snapshot { path: PathBuf, message: String },

    /// IO errors with optional path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenient Result type for align-tools operations
pub type Result<T> = std::result::Result<T, AlignDiffError>;

impl AlignDiffError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a coordinate parse error
    pub fn coordinate(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Coordinate {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a report-write error with path context
    pub fn report_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReportWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a snapshot-loading error with path context
    pub fn snapshot(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Snapshot {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }
}

impl From<std::io::Error> for AlignDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = AlignDiffError::config("Property clash for foo");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Property clash for foo"
        );
    }

    #[test]
    fn test_coordinate_error_display() {
        let err = AlignDiffError::coordinate("org.foo", "expected group:artifact:version");
        assert!(err.to_string().contains("org.foo"));
        assert!(err.to_string().contains("expected group:artifact:version"));
    }

    #[test]
    fn test_report_write_carries_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = AlignDiffError::report_write("/tmp/missing/report.txt", io_err);
        assert!(err.to_string().contains("/tmp/missing/report.txt"));
    }
}
