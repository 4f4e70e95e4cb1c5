//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) for exclusion sets,
//! version comparisons and schema validation reports.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::cmp::Ordering;
use std::io::{self, Write};
use tracing::trace;
use versionator_core::{ExclusionEvent, ExclusionSet};
use versionator_schemas::{SchemaIssue, Severity};

/// Fields excluded from a root type at one version
#[derive(Debug, Clone, Serialize)]
pub struct ExclusionReport {
    pub root_type: String,
    pub version: String,
    pub excluded: ExclusionSet,
    /// Declared bounds of each excluded field, in walk order
    pub details: Vec<ExclusionEvent>,
}

/// Outcome of comparing two versions
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub left: String,
    pub right: String,
    /// One of `<`, `=`, `>`
    pub ordering: String,
}

impl ComparisonReport {
    pub fn new(left: impl Into<String>, right: impl Into<String>, ordering: Ordering) -> Self {
        let symbol = match ordering {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        };
        Self {
            left: left.into(),
            right: right.into(),
            ordering: symbol.to_string(),
        }
    }
}

/// Issues found in one schema document
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub schema: String,
    pub types: usize,
    pub errors: usize,
    pub warnings: usize,
    pub issues: Vec<SchemaIssue>,
}

impl ValidationReport {
    pub fn new(schema: impl Into<String>, types: usize, issues: Vec<SchemaIssue>) -> Self {
        let errors = issues.iter().filter(|issue| issue.is_error()).count();
        Self {
            schema: schema.into(),
            types,
            errors,
            warnings: issues.len() - errors,
            issues,
        }
    }

    /// True when the document has no issues at all
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the excluded paths for a root type
    fn format_exclusions(&self, report: &ExclusionReport) -> Result<String>;

    /// Format a version comparison
    fn format_comparison(&self, report: &ComparisonReport) -> Result<String>;

    /// Format schema validation results
    fn format_validation(&self, report: &ValidationReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_exclusions(&self, report: &ExclusionReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_exclusions_human(report)),
            _ => self.format(report),
        }
    }

    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format!(
                "{} {} {}",
                report.left, report.ordering, report.right
            )),
            _ => self.format(report),
        }
    }

    fn format_validation(&self, report: &ValidationReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_human(report)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self::with_writer(format, use_color, quiet, verbose, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            verbose,
            writer,
        }
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Writing data");
        self.emit(&formatted)
    }

    /// Write an exclusion report; verbose human output adds the declared
    /// bounds of every excluded field
    pub fn exclusions(&mut self, report: &ExclusionReport) -> Result<()> {
        let formatted = self.format.format_exclusions(report)?;
        self.emit(&formatted)?;

        if self.verbose > 0 && !report.details.is_empty() {
            self.section("Declared bounds")?;
            let rows = report
                .details
                .iter()
                .map(|event| vec![event.path.clone(), event.since.clone(), event.until.clone()])
                .collect();
            self.table(&["Path", "Since", "Until"], rows)?;
        }
        Ok(())
    }

    /// Write a comparison report
    pub fn comparison(&mut self, report: &ComparisonReport) -> Result<()> {
        let formatted = self.format.format_comparison(report)?;
        self.emit(&formatted)
    }

    /// Write a validation report, colouring issues by severity in human mode
    pub fn validation(&mut self, report: &ValidationReport) -> Result<()> {
        if self.format != OutputFormat::Human || !self.use_color {
            let formatted = self.format.format_validation(report)?;
            return self.emit(&formatted);
        }

        self.writeln(&format_validation_header(report))?;
        for issue in &report.issues {
            let line = format!("  {}", issue);
            match issue.severity {
                Severity::Error => self.writeln(&line.red().to_string())?,
                Severity::Warning => self.writeln(&line.yellow().to_string())?,
            }
        }
        Ok(())
    }

    /// Write debug information if verbose mode is enabled
    pub fn debug(&mut self, message: &str) -> Result<()> {
        if self.verbose > 0 && self.format == OutputFormat::Human {
            if self.use_color {
                self.writeln(&format!("{} {}", "DEBUG:".dimmed(), message.dimmed()))
            } else {
                self.writeln(&format!("DEBUG: {}", message))
            }
        } else {
            Ok(())
        }
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        // Calculate column widths
        let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(&header_row.bold().to_string())?;
        } else {
            self.writeln(&header_row)?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| match widths.get(i) {
                    Some(width) => format!("{:width$}", cell, width = width),
                    None => cell.clone(),
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }

    /// Machine formats are written as-is, human output gets a trailing newline
    fn emit(&mut self, formatted: &str) -> Result<()> {
        if self.format == OutputFormat::Human || !formatted.ends_with('\n') {
            self.writeln(formatted)
        } else {
            self.write(formatted)
        }
    }
}

/// Format an exclusion report for human reading
fn format_exclusions_human(report: &ExclusionReport) -> String {
    if report.excluded.is_empty() {
        return format!(
            "No fields of {} are excluded at version {}",
            report.root_type, report.version
        );
    }

    let mut output = format!(
        "{} field(s) of {} excluded at version {}:",
        report.excluded.len(),
        report.root_type,
        report.version
    );
    for path in &report.excluded {
        output.push_str("\n  - ");
        output.push_str(path);
    }
    output
}

fn format_validation_header(report: &ValidationReport) -> String {
    if report.is_clean() {
        format!("✅ {}: {} type(s), no issues", report.schema, report.types)
    } else {
        format!(
            "{}: {} type(s), {} error(s), {} warning(s)",
            report.schema, report.types, report.errors, report.warnings
        )
    }
}

/// Format a validation report for human reading
fn format_validation_human(report: &ValidationReport) -> String {
    let mut output = format_validation_header(report);
    for issue in &report.issues {
        output.push_str("\n  ");
        output.push_str(&issue.to_string());
    }
    output
}
