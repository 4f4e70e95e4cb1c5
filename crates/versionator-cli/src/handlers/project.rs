//! Project command handler

use super::utils::{ensure_type, load_schema, read_document, write_document};
use crate::cli::ProjectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use tracing::{info, instrument};
use versionator_core::compute_exclusions;
use versionator_schemas::project;

/// Handle the project command
#[instrument(skip(config, output), fields(document = %args.document.display(), root_type = %args.target.root_type))]
pub fn handle_project(args: ProjectArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("project_command");
    let version = config.resolve_version(args.target.version.as_deref())?;

    let registry = load_schema(&args.schema, args.lenient)?;
    ensure_type(&registry, &args.target.root_type)?;

    let mut document = read_document(&args.document)?;
    let excluded = compute_exclusions(&registry, &args.target.root_type, &version)?;
    let removed = project(&mut document, &excluded);
    info!(removed, excluded = excluded.len(), version = %version, "Document projected");

    match &args.save_to {
        Some(path) => {
            write_document(path, &document)?;
            output.success(&format!(
                "Removed {} field(s) hidden at version {}, saved to {}",
                removed,
                version,
                path.display()
            ))
        }
        None => {
            output.debug(&format!("Removed {} field(s)", removed))?;
            output.data(&document)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OutputFormat, TargetArgs};
    use crate::error::Error;
    use crate::handlers::fixtures::{write, PERSON_SCHEMA};
    use crate::output::tests::writer;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PEOPLE: &str = r#"[
        {"name": "Ada", "nickname": "A", "address": {"street": "Main", "zip": "123"}},
        {"name": "Alan", "address": {"street": "High", "zip": "456"}}
    ]"#;

    fn args(schema: PathBuf, document: PathBuf, version: &str, save_to: Option<PathBuf>) -> ProjectArgs {
        ProjectArgs {
            schema,
            document,
            target: TargetArgs {
                root_type: "Person".to_string(),
                version: Some(version.to_string()),
            },
            lenient: false,
            save_to,
        }
    }

    #[test]
    fn test_project_through_arrays() {
        let dir = TempDir::new().unwrap();
        let schema = write(&dir, "person.yaml", PERSON_SCHEMA);
        let document = write(&dir, "people.json", PEOPLE);
        let (mut out, buffer) = writer(OutputFormat::Json, false, 0);

        handle_project(args(schema, document, "1.0", None), &Config::default(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(
            value,
            json!([
                {"name": "Ada", "address": {"street": "Main"}},
                {"name": "Alan", "address": {"street": "High"}}
            ])
        );
    }

    #[test]
    fn test_project_in_range_keeps_everything() {
        let dir = TempDir::new().unwrap();
        let schema = write(&dir, "person.yaml", PERSON_SCHEMA);
        let document = write(&dir, "people.json", PEOPLE);
        let (mut out, buffer) = writer(OutputFormat::Json, false, 0);

        handle_project(args(schema, document, "2.5", None), &Config::default(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let original: serde_json::Value = serde_json::from_str(PEOPLE).unwrap();
        assert_eq!(value, original);
    }

    #[test]
    fn test_project_saves_yaml() {
        let dir = TempDir::new().unwrap();
        let schema = write(&dir, "person.yaml", PERSON_SCHEMA);
        let document = write(&dir, "ada.yaml", "name: Ada\nnickname: A\n");
        let target = dir.path().join("ada-1.0.yaml");
        let (mut out, buffer) = writer(OutputFormat::Human, false, 0);

        handle_project(
            args(schema, document, "1.0", Some(target.clone())),
            &Config::default(),
            &mut out,
        )
        .unwrap();

        assert!(buffer.contents().starts_with("Removed 1 field(s) hidden at version 1.0"));
        assert_eq!(read_document(&target).unwrap(), json!({"name": "Ada"}));
    }

    #[test]
    fn test_missing_document() {
        let dir = TempDir::new().unwrap();
        let schema = write(&dir, "person.yaml", PERSON_SCHEMA);
        let (mut out, _) = writer(OutputFormat::Json, false, 0);

        let err = handle_project(
            args(schema, dir.path().join("absent.json"), "1.0", None),
            &Config::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
