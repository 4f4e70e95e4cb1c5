//! Shared utilities for command handlers

use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;
use versionator_core::{CollectingSink, DiagnosticsSink, ExclusionEvent, SchemaRegistry, TracingSink};
use versionator_schemas::{LoaderConfig, SchemaLoader};

/// Load a schema document, refusing error-level issues unless `lenient`
pub fn load_schema(path: &Path, lenient: bool) -> Result<SchemaRegistry> {
    let _timer = Timer::with_details("schema_loading", &path.display().to_string());

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let loader = SchemaLoader::with_config(LoaderConfig {
        strict: !lenient,
        report_warnings: true,
    });
    let registry = loader.load_file(path)?;
    debug!(types = registry.len(), "Schema loaded");
    Ok(registry)
}

/// Fail unless the schema declares the root type
pub fn ensure_type(registry: &SchemaRegistry, name: &str) -> Result<()> {
    if registry.contains(name) {
        Ok(())
    } else {
        Err(Error::TypeNotFound {
            name: name.to_string(),
        })
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Read a JSON or YAML document into a JSON value
pub fn read_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    debug!(bytes = content.len(), "Document read");

    if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        })
    }
}

/// Write a document as YAML or pretty JSON depending on the extension
pub fn write_document(path: &Path, value: &Value) -> Result<()> {
    let content = if is_yaml(path) {
        serde_yaml::to_string(value)?
    } else {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        json
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Logs every exclusion and keeps a copy for the report
#[derive(Debug, Default)]
pub struct ReportingSink {
    collected: CollectingSink,
}

impl ReportingSink {
    pub fn events(&self) -> Vec<ExclusionEvent> {
        self.collected.events()
    }
}

impl DiagnosticsSink for ReportingSink {
    fn record(&self, event: &ExclusionEvent) {
        TracingSink.record(event);
        self.collected.record(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::fixtures::{write, PERSON_SCHEMA};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_schema_and_ensure_type() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "person.yaml", PERSON_SCHEMA);

        let registry = load_schema(&path, false).unwrap();
        assert!(ensure_type(&registry, "Person").is_ok());
        assert!(matches!(
            ensure_type(&registry, "Company"),
            Err(Error::TypeNotFound { .. })
        ));
    }

    #[test]
    fn test_lenient_loading() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "broken.yaml",
            "types:\n  Widget:\n    fields:\n      - { name: color, type: string, since: \"3.0\", until: \"2.0\" }\n",
        );

        assert!(matches!(load_schema(&path, false), Err(Error::Loader(_))));
        assert_eq!(load_schema(&path, true).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_schema() {
        let dir = TempDir::new().unwrap();
        let err = load_schema(&dir.path().join("absent.yaml"), false).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_document_round_trip_in_both_formats() {
        let dir = TempDir::new().unwrap();
        let value = json!({"name": "Ada", "tags": ["a", "b"]});

        for name in ["doc.json", "doc.yaml"] {
            let path = dir.path().join("out").join(name);
            write_document(&path, &value).unwrap();
            assert_eq!(read_document(&path).unwrap(), value);
        }
    }

    #[test]
    fn test_malformed_document() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "doc.json", "{ not json");
        assert!(matches!(
            read_document(&path),
            Err(Error::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_reporting_sink_collects() {
        let sink = ReportingSink::default();
        sink.record(&ExclusionEvent {
            since: "2.0".to_string(),
            requested: "1.0".to_string(),
            until: "3.0".to_string(),
            path: "nickname".to_string(),
        });
        assert_eq!(sink.events().len(), 1);
    }
}
