//! Error types for charmscan operations.
//!
//! This module defines [`CharmscanError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems are caller errors and surface immediately,
//!   before any checker executes
//! - Checker-internal failures never escape the analysis engine; they are
//!   mapped to fallback outcomes at that boundary
//! - Use `anyhow::Error` (via `CharmscanError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for charmscan operations.
#[derive(Debug, Error)]
pub enum CharmscanError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for charmscan operations.
pub type Result<T> = std::result::Result<T, CharmscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = CharmscanError::ConfigNotFound {
            path: PathBuf::from("/foo/charmscan.yml"),
        };
        assert!(err.to_string().contains("/foo/charmscan.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = CharmscanError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = CharmscanError::ConfigValidationError {
            message: "unknown checker name".into(),
        };
        assert!(err.to_string().contains("unknown checker name"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CharmscanError = io_err.into();
        assert!(matches!(err, CharmscanError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CharmscanError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
