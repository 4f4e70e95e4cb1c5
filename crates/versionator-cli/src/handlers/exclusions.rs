//! Exclusions command handler

use super::utils::{ensure_type, load_schema, ReportingSink};
use crate::cli::ExclusionsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{ExclusionReport, OutputWriter};
use tracing::{info, instrument};
use versionator_core::ExclusionCalculator;

/// Handle the exclusions command
#[instrument(skip(config, output), fields(schema = %args.schema.display(), root_type = %args.target.root_type))]
pub fn handle_exclusions(
    args: ExclusionsArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::new("exclusions_command");
    let version = config.resolve_version(args.target.version.as_deref())?;

    output.info(&format!("Loading schema: {}", args.schema.display()))?;
    let registry = load_schema(&args.schema, args.lenient)?;
    ensure_type(&registry, &args.target.root_type)?;
    output.debug(&format!("{} type(s) declared", registry.len()))?;

    let calculator = ExclusionCalculator::new(&registry).with_sink(ReportingSink::default());
    let excluded = calculator.compute(&args.target.root_type, &version)?;
    info!(count = excluded.len(), version = %version, "Exclusions computed");

    output.exclusions(&ExclusionReport {
        root_type: args.target.root_type,
        version,
        excluded,
        details: calculator.sink().events(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OutputFormat, TargetArgs};
    use crate::config::ConfigBuilder;
    use crate::error::Error;
    use crate::handlers::fixtures::{write, PERSON_SCHEMA};
    use crate::output::tests::writer;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(schema: PathBuf, root_type: &str, version: Option<&str>) -> ExclusionsArgs {
        ExclusionsArgs {
            schema,
            target: TargetArgs {
                root_type: root_type.to_string(),
                version: version.map(String::from),
            },
            lenient: false,
        }
    }

    #[test]
    fn test_exclusions_as_json() {
        let dir = TempDir::new().unwrap();
        let schema = write(&dir, "person.yaml", PERSON_SCHEMA);
        let (mut out, buffer) = writer(OutputFormat::Json, false, 0);

        handle_exclusions(args(schema, "Person", Some("1.0")), &Config::default(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(value["excluded"], serde_json::json!(["address.zip", "nickname"]));
        assert_eq!(value["version"], "1.0");
        assert_eq!(value["details"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_default_version_from_config() {
        let dir = TempDir::new().unwrap();
        let schema = write(&dir, "person.yaml", PERSON_SCHEMA);
        let config = ConfigBuilder::new().default_version("3.1").build();
        let (mut out, buffer) = writer(OutputFormat::Human, true, 0);

        handle_exclusions(args(schema, "Person", None), &config, &mut out).unwrap();

        assert_eq!(
            buffer.contents(),
            "1 field(s) of Person excluded at version 3.1:\n  - nickname\n"
        );
    }

    #[test]
    fn test_unknown_root_type() {
        let dir = TempDir::new().unwrap();
        let schema = write(&dir, "person.yaml", PERSON_SCHEMA);
        let (mut out, _) = writer(OutputFormat::Human, true, 0);

        let err = handle_exclusions(args(schema, "Company", Some("1.0")), &Config::default(), &mut out)
            .unwrap_err();
        assert!(matches!(err, Error::TypeNotFound { .. }));
    }

    #[test]
    fn test_malformed_version_is_fatal() {
        let dir = TempDir::new().unwrap();
        let schema = write(&dir, "person.yaml", PERSON_SCHEMA);
        let (mut out, buffer) = writer(OutputFormat::Json, false, 0);

        let err = handle_exclusions(args(schema, "Person", Some("1.x.3")), &Config::default(), &mut out)
            .unwrap_err();
        assert!(matches!(err, Error::Core(_)));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(buffer.contents(), "");
    }

    #[test]
    fn test_unsupported_version() {
        let dir = TempDir::new().unwrap();
        let schema = write(&dir, "person.yaml", PERSON_SCHEMA);
        let config = ConfigBuilder::new().supported(Some("2.0"), None).build();
        let (mut out, _) = writer(OutputFormat::Json, false, 0);

        let err = handle_exclusions(args(schema, "Person", Some("1.0")), &config, &mut out).unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion { .. }));
    }
}
