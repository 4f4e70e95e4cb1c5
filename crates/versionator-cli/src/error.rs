//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from versionator-core (malformed or incomparable versions)
    #[error("Version error: {0}")]
    Core(#[from] versionator_core::Error),

    /// Error while loading a schema document
    #[error("Schema error: {0}")]
    Loader(#[from] versionator_schemas::LoaderError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Invalid file format
    #[error("Invalid file format for {}: expected {} format", path.display(), expected)]
    InvalidFormat { path: PathBuf, expected: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// Root type not declared in the schema
    #[error("Type '{}' is not declared in the schema", name)]
    TypeNotFound { name: String },

    /// Requested version outside the configured supported range
    #[error("Version '{}' is outside the supported range {}", version, supported)]
    UnsupportedVersion { version: String, supported: String },

    /// Schema validation reported blocking issues
    #[error("Schema validation failed: {} error(s), {} warning(s)", errors, warnings)]
    ValidationFailed { errors: usize, warnings: usize },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(_) => 2,
            Self::Loader(_) => 3,
            Self::FileNotFound { .. } => 4,
            Self::InvalidFormat { .. } => 5,
            Self::Config(_) => 6,
            Self::InvalidArgs(_) => 7,
            Self::TypeNotFound { .. } => 8,
            Self::UnsupportedVersion { .. } => 9,
            Self::ValidationFailed { .. } => 10,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_category() {
        let core: Error = versionator_core::Error::version_format("1.x", "bad").into();
        assert_eq!(core.exit_code(), 2);
        assert_eq!(Error::TypeNotFound { name: "Person".into() }.exit_code(), 8);
        assert_eq!(Error::other("boom").exit_code(), 99);
    }

    #[test]
    fn test_format_error_without_color() {
        let err = Error::invalid_args("--version is required");
        assert_eq!(
            format_error(&err, false),
            "Error: Invalid arguments: --version is required"
        );
        assert!(err.should_show_help());
    }
}
