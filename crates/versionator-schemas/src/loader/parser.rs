//! Schema document parsing for YAML and JSON formats
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use std::path::Path;
use versionator_core::SchemaRegistry;

/// Supported file formats for schema documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(LoaderError::unsupported_format(path.to_path_buf())),
        }
    }

    /// Get the primary file extension for this format
    pub fn primary_extension(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

/// Parse schema document content into a registry.
///
/// `path` is only used for error context.
pub fn parse_content(content: &str, format: Format, path: &Path) -> LoaderResult<SchemaRegistry> {
    match format {
        Format::Yaml => serde_yaml::from_str(content)
            .map_err(|e| LoaderError::yaml_parse_error(path.to_path_buf(), e)),
        Format::Json => serde_json::from_str(content)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e)),
    }
}

/// Read and parse a schema document, detecting the format from its extension
pub fn parse_file(path: &Path) -> LoaderResult<SchemaRegistry> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;

    parse_content(&content, format, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(Path::new("schema.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("schema.YML")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("schema.json")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("schema.toml")).is_err());
        assert!(Format::from_path(Path::new("schema")).is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let content = r#"
types:
  Person:
    fields:
      - name: name
        type: string
      - name: email
        type: string
        since: "2.0"
"#;
        let registry = parse_content(content, Format::Yaml, Path::new("inline.yaml")).unwrap();
        let person = registry.get("Person").unwrap();
        assert_eq!(person.fields.len(), 2);
        assert_eq!(person.fields[1].since.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_parse_json_error() {
        let err = parse_content("{ not json", Format::Json, Path::new("bad.json")).unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("bad.json"));
    }
}
