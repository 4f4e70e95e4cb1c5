//! Validate command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{OutputWriter, ValidationReport};
use tracing::{info, instrument, warn};
use versionator_schemas::{LoaderConfig, SchemaLoader};

/// Handle the validate command
///
/// The document is parsed leniently so that every issue is reported at once.
/// Fails with [`Error::ValidationFailed`] when errors are found, or warnings
/// with `--deny-warnings`.
#[instrument(skip(_config, output), fields(schema = %args.schema.display()))]
pub fn handle_validate(args: ValidateArgs, _config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &args.schema.display().to_string());
    output.info(&format!("Validating schema: {}", args.schema.display()))?;

    if !args.schema.exists() {
        return Err(Error::FileNotFound {
            path: args.schema.clone(),
        });
    }

    let loader = SchemaLoader::with_config(LoaderConfig {
        strict: false,
        report_warnings: false,
    });
    let registry = loader.load_file(&args.schema)?;
    let issues = loader.validate(&registry);

    let report = ValidationReport::new(args.schema.display().to_string(), registry.len(), issues);
    info!(errors = report.errors, warnings = report.warnings, "Schema validated");
    output.validation(&report)?;

    if report.errors > 0 || (args.deny_warnings && report.warnings > 0) {
        warn!("Schema validation failed");
        return Err(Error::ValidationFailed {
            errors: report.errors,
            warnings: report.warnings,
        });
    }

    Ok(())
}
