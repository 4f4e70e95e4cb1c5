//! Schema loader turning documents into validated registries
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

use crate::loader::{
    error::{LoaderError, LoaderResult},
    parser::{self, Format},
    validation::{validate_registry, SchemaIssue},
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use versionator_core::SchemaRegistry;

/// Configuration for schema loader behavior
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Reject documents with error-level issues
    pub strict: bool,
    /// Log warning-level issues while loading
    pub report_warnings: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            strict: true,
            report_warnings: true,
        }
    }
}

/// Loads schema documents from files or strings
#[derive(Debug, Default)]
pub struct SchemaLoader {
    config: LoaderConfig,
}

impl SchemaLoader {
    /// Create a new schema loader with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new schema loader with custom configuration
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a schema document from a `.yaml`, `.yml` or `.json` file
    pub fn load_file(&self, path: &Path) -> LoaderResult<SchemaRegistry> {
        debug!(path = %path.display(), "Loading schema document");
        let registry = parser::parse_file(path)?;
        self.check(registry, path)
    }

    /// Load a schema document from a string
    pub fn load_str(&self, content: &str, format: Format) -> LoaderResult<SchemaRegistry> {
        let path = PathBuf::from(format!("<inline>.{}", format.primary_extension()));
        let registry = parser::parse_content(content, format, &path)?;
        self.check(registry, &path)
    }

    /// Run structural checks without loading anything
    pub fn validate(&self, registry: &SchemaRegistry) -> Vec<SchemaIssue> {
        validate_registry(registry)
    }

    fn check(&self, registry: SchemaRegistry, path: &Path) -> LoaderResult<SchemaRegistry> {
        let issues = self.validate(&registry);

        if self.config.report_warnings {
            for issue in issues.iter().filter(|issue| !issue.is_error()) {
                warn!(path = %path.display(), location = %issue.location, "{}", issue.message);
            }
        }

        if self.config.strict && issues.iter().any(SchemaIssue::is_error) {
            return Err(LoaderError::invalid_schema(path.to_path_buf(), issues));
        }

        debug!(path = %path.display(), types = registry.len(), "Schema document loaded");
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROKEN: &str = r#"{
        "types": {
            "Widget": {
                "fields": [{"name": "color", "type": "string", "since": "x.1"}]
            }
        }
    }"#;

    #[test]
    fn test_strict_rejects_errors() {
        let err = SchemaLoader::new().load_str(BROKEN, Format::Json).unwrap_err();
        match err {
            LoaderError::InvalidSchema { issues, .. } => assert_eq!(issues.len(), 1),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_lenient_accepts_errors() {
        let loader = SchemaLoader::with_config(LoaderConfig {
            strict: false,
            ..LoaderConfig::default()
        });
        let registry = loader.load_str(BROKEN, Format::Json).unwrap();
        assert!(registry.contains("Widget"));
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let content = "types:\n  Person:\n    fields:\n      - { name: employer, type: Company }\n";
        let registry = SchemaLoader::new().load_str(content, Format::Yaml).unwrap();
        assert_eq!(registry.len(), 1);
    }
}
