//! Versionator CLI - Command-line interface for version-aware field exclusion
//!
//! This is the main entry point for the Versionator CLI application,
//! providing commands for computing exclusion sets, pruning documents to a
//! version, comparing versions, and validating schema documents.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use clap::ValueEnum;
use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Configuration shapes logging, so it is read before the subscriber exists
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e, !cli.no_color),
    };

    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli, &config, use_color) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(&e, use_color),
    }
}

fn exit_with(e: &error::Error, use_color: bool) -> ! {
    eprintln!("{}", error::format_error(e, use_color));

    if e.should_show_help() {
        eprintln!("\nFor more information, try '--help'");
    }

    process::exit(e.exit_code());
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config, use_color: bool) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = resolve_output_format(&cli, config);
    let mut output = OutputWriter::new(format, use_color, cli.quiet, cli.verbosity_level());

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Exclusions(args) => handlers::handle_exclusions(args, config, &mut output),
        Commands::Project(args) => handlers::handle_project(args, config, &mut output),
        Commands::Compare(args) => handlers::handle_compare(args, &mut output),
        Commands::Validate(args) => handlers::handle_validate(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// An explicit `--output` wins, then `output.format` from the config file
fn resolve_output_format(cli: &Cli, config: &Config) -> OutputFormat {
    if cli.output != OutputFormat::Human {
        return cli.output;
    }

    match OutputFormat::from_str(&config.output.format, true) {
        Ok(format) => format,
        Err(_) => {
            tracing::warn!(format = %config.output.format, "Unknown output format in config, using human");
            OutputFormat::Human
        }
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_file(&config.logging, cli.verbosity_level());
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
