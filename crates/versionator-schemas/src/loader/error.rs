//! Error types for schema loading operations
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

use crate::loader::validation::SchemaIssue;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Error types for schema loading operations
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },

    /// Schema document failed validation
    #[error("Invalid schema '{path}': {}", summarize(issues))]
    InvalidSchema {
        path: PathBuf,
        issues: Vec<SchemaIssue>,
    },
}

fn summarize(issues: &[SchemaIssue]) -> String {
    let errors: Vec<String> = issues
        .iter()
        .filter(|issue| issue.is_error())
        .map(ToString::to_string)
        .collect();

    match errors.len() {
        0 => "no errors".to_string(),
        1 => errors[0].clone(),
        n => format!("{} errors, first: {}", n, errors[0]),
    }
}

impl LoaderError {
    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, error: std::io::Error) -> Self {
        Self::IoError {
            path,
            source: error,
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: PathBuf, error: serde_yaml::Error) -> Self {
        Self::YamlParseError {
            path,
            source: error,
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::JsonParseError {
            path,
            source: error,
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// Create an invalid schema error
    pub fn invalid_schema(path: PathBuf, issues: Vec<SchemaIssue>) -> Self {
        Self::InvalidSchema { path, issues }
    }

    /// Path of the file involved in the error
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::IoError { path, .. }
            | Self::YamlParseError { path, .. }
            | Self::JsonParseError { path, .. }
            | Self::UnsupportedFormat { path }
            | Self::InvalidSchema { path, .. } => path,
        }
    }

    /// Whether the error comes from malformed file content
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::YamlParseError { .. } | Self::JsonParseError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::validation::IssueKind;

    #[test]
    fn test_invalid_schema_message() {
        let err = LoaderError::invalid_schema(
            PathBuf::from("schema.yaml"),
            vec![
                SchemaIssue::new(IssueKind::UnknownType, "Person.employer", "type 'Company' is not declared"),
                SchemaIssue::new(IssueKind::InvalidBound, "Person.age", "bad"),
            ],
        );

        let message = err.to_string();
        assert!(message.contains("schema.yaml"));
        assert!(message.contains("Person.age"));
        assert!(!message.contains("Company"));
    }

    #[test]
    fn test_path_accessor() {
        let err = LoaderError::unsupported_format(PathBuf::from("schema.txt"));
        assert_eq!(err.path(), &PathBuf::from("schema.txt"));
        assert!(!err.is_parse_error());
    }
}
