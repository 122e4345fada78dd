//! Error handling for the GLView core layer.
//!
//! This module provides the error types shared by every GLView crate. They are
//! defined with the `thiserror` crate for ergonomic error definition and handling.
//!
//! The main error type for this crate is [`CoreError`], which encapsulates
//! more specific errors like [`ConfigError`] and [`LoggingError`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use glview_core::error::CoreError;
//!
//! fn parse_width(raw: &str) -> Result<f64, CoreError> {
//!     raw.parse::<f64>()
//!         .map_err(|e| CoreError::InvalidInput(format!("bad width '{}': {}", raw, e)))
//! }
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for GLView.
///
/// This enum represents all possible errors that can occur in the core layer.
/// Higher layers wrap it (see `glview_system::error::ViewError::Core`).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    /// Wraps a [`ConfigError`].
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur while setting up the logging system.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Errors related to filesystem operations, such as creating directories or reading files,
    /// that are not covered by more specific configuration or logging I/O errors.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not covered by other specific variants.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors due to invalid input provided to a function or method.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Parsed values failed validation (unknown policy, zero design size, ...).
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g., XDG config/state home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging initialization.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// Failed to install the global subscriber.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// Failed to set or parse a log filter.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),

    /// An I/O error occurred while preparing log output.
    #[error("Logging I/O error: {0}")]
    IoError(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_core_error_config_variant() {
        let core_err = CoreError::Config(ConfigError::ValidationError("design_width must be > 0".to_string()));

        assert_eq!(
            format!("{}", core_err),
            "Configuration Error: Configuration validation failed: design_width must be > 0"
        );
        match core_err.source().and_then(|s| s.downcast_ref::<ConfigError>()) {
            Some(ConfigError::ValidationError(msg)) => assert_eq!(msg, "design_width must be > 0"),
            _ => panic!("Incorrect source for CoreError::Config"),
        }
    }

    #[test]
    fn test_core_error_logging_variant() {
        let core_err: CoreError = LoggingError::FilterError("bogus".to_string()).into();
        assert_eq!(format!("{}", core_err), "Logging Error: Failed to set log filter: bogus");
        assert!(core_err.source().is_some());
    }

    #[test]
    fn test_core_error_filesystem_variant() {
        let path = PathBuf::from("/tmp/glview/state");
        let core_err = CoreError::Filesystem {
            message: "Path exists but is not a directory".to_string(),
            path: path.clone(),
            source: IoError::new(ErrorKind::AlreadyExists, "occupied"),
        };

        assert_eq!(
            format!("{}", core_err),
            format!("Filesystem Error: Path exists but is not a directory (Path: {:?})", path)
        );
        assert_eq!(
            core_err.source().unwrap().downcast_ref::<IoError>().unwrap().kind(),
            ErrorKind::AlreadyExists
        );
    }

    #[test]
    fn test_core_error_io_variant() {
        let core_err = CoreError::from(IoError::new(ErrorKind::NotFound, "gone"));
        assert_eq!(format!("{}", core_err), "I/O Error: gone");
    }

    #[test]
    fn test_config_error_parse_error_variant() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("this is not valid toml").unwrap_err();
        let display = format!("{}", toml_err);
        let config_err = ConfigError::ParseError(toml_err);

        assert_eq!(format!("{}", config_err), format!("Failed to parse configuration file: {}", display));
        assert!(config_err.source().unwrap().is::<toml::de::Error>());
    }

    #[test]
    fn test_config_error_directory_unavailable_variant() {
        let config_err = ConfigError::DirectoryUnavailable { dir_type: "Config Base".to_string() };
        assert_eq!(format!("{}", config_err), "Could not determine base directory for Config Base");
        assert!(config_err.source().is_none());
    }

    #[test]
    fn test_logging_error_initialization_failure_variant() {
        let log_err = LoggingError::InitializationFailure("already set".to_string());
        assert_eq!(format!("{}", log_err), "Failed to initialize logging: already set");
        assert!(log_err.source().is_none());
    }
}
