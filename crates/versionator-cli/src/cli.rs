//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Versionator CLI - Version-aware field exclusion for schema graphs
///
/// Computes which fields of a schema are invisible at a given version,
/// prunes JSON documents accordingly, and checks schema documents for
/// malformed version bounds.
#[derive(Parser, Debug)]
#[command(
    name = "versionator",
    version,
    author,
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "VERSIONATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the field paths excluded at a version
    Exclusions(ExclusionsArgs),

    /// Remove the fields excluded at a version from a JSON or YAML document
    Project(ProjectArgs),

    /// Compare two version strings
    Compare(CompareArgs),

    /// Check a schema document for invalid types and version bounds
    Validate(ValidateArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Root type and requested version shared by the walking commands
#[derive(clap::Args, Debug, Clone)]
pub struct TargetArgs {
    /// Root type to start the walk from
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub root_type: String,

    /// Requested version (falls back to `versions.default_version` in the config)
    #[arg(long = "version", value_name = "VERSION")]
    pub version: Option<String>,
}

/// Arguments for the exclusions command
#[derive(Parser, Debug)]
pub struct ExclusionsArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Load the schema even if it has error-level issues
    #[arg(long)]
    pub lenient: bool,
}

/// Arguments for the project command
#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Path to the document to prune (JSON or YAML)
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Load the schema even if it has error-level issues
    #[arg(long)]
    pub lenient: bool,

    /// Output file path (stdout if not specified)
    #[arg(long = "save-to", value_name = "OUTPUT_FILE")]
    pub save_to: Option<PathBuf>,
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// Right-hand version
    #[arg(value_name = "RIGHT")]
    pub right: String,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Treat warnings as errors
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
