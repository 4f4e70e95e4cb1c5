//! Structural checks over a loaded schema registry
//!
//! The exclusion walk tolerates missing types and only discovers malformed
//! bounds when it reaches them. These checks surface both problems up front,
//! at load time.
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use versionator_core::{is_leaf_type, Error as CoreError, FieldSchema, SchemaRegistry, VersionRange};

/// Severity levels for schema issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but usable, the walk degrades gracefully
    Warning,
    /// The computation would fail or give meaningless results
    Error,
}

/// Kind of problem found in a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A complex field references a type that is not declared
    UnknownType,
    /// A `since` or `until` bound cannot be parsed
    InvalidBound,
    /// `since` is above `until`, so the field is never visible
    EmptyRange,
    /// One bound is numeric and the other text-only
    MixedBounds,
    /// Two fields of one type share a name
    DuplicateField,
}

impl IssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::UnknownType => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// A single problem located at `Type.field`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaIssue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub location: String,
    pub message: String,
}

impl SchemaIssue {
    pub fn new(kind: IssueKind, location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "[{}] {}: {}", level, self.location, self.message)
    }
}

/// Check every declared type of a registry
pub fn validate_registry(registry: &SchemaRegistry) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();

    for (type_name, schema) in registry.iter() {
        let mut seen = HashSet::new();

        for field in &schema.fields {
            let location = format!("{}.{}", type_name, field.name);

            if !seen.insert(field.name.as_str()) {
                issues.push(SchemaIssue::new(
                    IssueKind::DuplicateField,
                    &location,
                    format!("field '{}' is declared more than once", field.name),
                ));
            }

            if !is_leaf_type(&field.type_name) && !registry.contains(&field.type_name) {
                issues.push(SchemaIssue::new(
                    IssueKind::UnknownType,
                    &location,
                    format!(
                        "type '{}' is not declared, its fields will not be checked",
                        field.type_name
                    ),
                ));
            }

            if let Some(issue) = check_bounds(field, &location) {
                issues.push(issue);
            }
        }
    }

    issues
}

fn check_bounds(field: &FieldSchema, location: &str) -> Option<SchemaIssue> {
    let bounds = field.bounds()?;

    let range = match VersionRange::from_bounds(&bounds) {
        Ok(range) => range,
        Err(e) => return Some(SchemaIssue::new(IssueKind::InvalidBound, location, e.to_string())),
    };

    match range.is_empty() {
        Ok(false) => None,
        Ok(true) => Some(SchemaIssue::new(
            IssueKind::EmptyRange,
            location,
            format!("since '{}' is above until '{}'", bounds.since, bounds.until),
        )),
        Err(e @ CoreError::IncomparableVersions { .. }) => {
            Some(SchemaIssue::new(IssueKind::MixedBounds, location, e.to_string()))
        }
        Err(e) => Some(SchemaIssue::new(IssueKind::InvalidBound, location, e.to_string())),
    }
}
