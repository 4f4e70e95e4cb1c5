//! Loader tests against real files on disk
//!
//! These tests write schema documents to temporary directories and load them
//! back through the public API, then run the exclusion walk end to end.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use versionator_core::compute_exclusions;
use versionator_schemas::{Format, IssueKind, LoaderConfig, LoaderError, SchemaLoader};

const PERSON_YAML: &str = r#"
types:
  Person:
    fields:
      - name: name
        type: string
      - name: address
        type: Address
      - name: nickname
        type: string
        since: "2.0"
        until: "3.0"
  Address:
    fields:
      - name: street
        type: string
      - name: zip
        type: string
        since: "2.0"
        until: "9999"
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[cfg(test)]
mod file_loading {
    use super::*;

    #[test]
    fn test_load_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "person.yaml", PERSON_YAML);

        let registry = SchemaLoader::new().load_file(&path).unwrap();
        assert_eq!(registry.len(), 2);

        let excluded = compute_exclusions(&registry, "Person", "1.0").unwrap();
        assert_eq!(excluded.to_vec(), vec!["address.zip", "nickname"]);

        let excluded = compute_exclusions(&registry, "Person", "3.1").unwrap();
        assert_eq!(excluded.to_vec(), vec!["nickname"]);
    }

    #[test]
    fn test_yaml_and_json_are_equivalent() {
        let dir = TempDir::new().unwrap();
        let yaml_path = write(&dir, "person.yml", PERSON_YAML);

        let loader = SchemaLoader::new();
        let from_yaml = loader.load_file(&yaml_path).unwrap();

        let json = serde_json::to_string_pretty(&from_yaml).unwrap();
        let json_path = write(&dir, "person.json", &json);
        let from_json = loader.load_file(&json_path).unwrap();

        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SchemaLoader::new()
            .load_file(&dir.path().join("absent.yaml"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::IoError { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "person.txt", PERSON_YAML);
        let err = SchemaLoader::new().load_file(&path).unwrap_err();
        assert!(matches!(err, LoaderError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.yaml", "types: [unclosed");
        let err = SchemaLoader::new().load_file(&path).unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(err.path(), &path);
    }
}

#[cfg(test)]
mod validation {
    use super::*;

    const INVALID: &str = r#"
types:
  Widget:
    fields:
      - { name: color, type: string, since: "3.0", until: "2.0" }
      - { name: owner, type: Person }
"#;

    #[test]
    fn test_strict_loading_reports_all_issues() {
        let err = SchemaLoader::new().load_str(INVALID, Format::Yaml).unwrap_err();
        let LoaderError::InvalidSchema { issues, .. } = err else {
            panic!("expected InvalidSchema");
        };

        let kinds: Vec<_> = issues.iter().map(|issue| issue.kind).collect();
        assert_eq!(kinds, vec![IssueKind::EmptyRange, IssueKind::UnknownType]);
    }

    #[test]
    fn test_lenient_loading_keeps_going() {
        let loader = SchemaLoader::with_config(LoaderConfig {
            strict: false,
            report_warnings: false,
        });
        let registry = loader.load_str(INVALID, Format::Yaml).unwrap();

        // An empty range hides the field at every version
        let excluded = compute_exclusions(&registry, "Widget", "2.5").unwrap();
        assert_eq!(excluded.to_vec(), vec!["color"]);
    }
}
