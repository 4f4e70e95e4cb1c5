//! Exclusion calculator
//!
//! Walks a schema graph depth first from a root type and collects the paths
//! of every field whose version bounds do not contain the requested version.
//!
//! - An excluded field is not descended into, so the result holds the
//!   minimal cut of the schema tree rather than every hidden leaf.
//! - A field without version bounds is kept, and if its type is complex its
//!   own fields are still walked.
//! - Paths are built from field names, so one type reused under two fields
//!   yields two distinct scopes.
//! - A complex field whose type already appears between the root and the
//!   field is treated as a leaf, which keeps self-referential schemas finite.
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

use crate::diagnostics::{DiagnosticsSink, ExclusionEvent, TracingSink};
use crate::error::Result;
use crate::exclusion::{join_path, ExclusionSet};
use crate::schema::{PropertyDescriptor, SchemaProvider};
use crate::version::{Version, VersionRange};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Compute the paths excluded from `root_type` at version `target`, logging
/// each exclusion through `tracing`
pub fn compute_exclusions<P>(provider: &P, root_type: &str, target: &str) -> Result<ExclusionSet>
where
    P: SchemaProvider + ?Sized,
{
    ExclusionCalculator::new(provider).compute(root_type, target)
}

/// Reusable calculator bound to a schema provider and a diagnostics sink
pub struct ExclusionCalculator<'a, P: ?Sized, S = TracingSink> {
    provider: &'a P,
    sink: S,
}

impl<'a, P> ExclusionCalculator<'a, P, TracingSink>
where
    P: SchemaProvider + ?Sized,
{
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            sink: TracingSink,
        }
    }
}

impl<'a, P, S> ExclusionCalculator<'a, P, S>
where
    P: SchemaProvider + ?Sized,
    S: DiagnosticsSink,
{
    /// Replace the diagnostics sink
    pub fn with_sink<T: DiagnosticsSink>(self, sink: T) -> ExclusionCalculator<'a, P, T> {
        ExclusionCalculator {
            provider: self.provider,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Compute the exclusion set of `root_type` at version `target`.
    ///
    /// Malformed or incomparable versions abort the computation. Provider
    /// failures are logged and degrade to "no constraint" for the property
    /// involved.
    pub fn compute(&self, root_type: &str, target: &str) -> Result<ExclusionSet> {
        debug!(root_type, target, "Computing exclusions");

        let mut walk = Walk {
            provider: self.provider,
            sink: &self.sink,
            requested: target,
            target: None,
            excluded: ExclusionSet::new(),
            ancestors: vec![root_type.to_string()],
        };
        walk.visit("", root_type)?;

        debug!(root_type, target, excluded = walk.excluded.len(), "Exclusions computed");
        Ok(walk.excluded)
    }
}

/// State of a single computation
struct Walk<'w, P: ?Sized, S> {
    provider: &'w P,
    sink: &'w S,
    requested: &'w str,
    /// Parsed on first use so schemas without bounds accept any request
    target: Option<Version>,
    excluded: ExclusionSet,
    /// Types between the root and the property being visited
    ancestors: Vec<String>,
}

impl<P, S> Walk<'_, P, S>
where
    P: SchemaProvider + ?Sized,
    S: DiagnosticsSink,
{
    fn visit(&mut self, prefix: &str, type_name: &str) -> Result<()> {
        let properties = match self.provider.properties_of(type_name) {
            Ok(properties) => properties,
            Err(e) => {
                warn!(type_name, path = prefix, error = %e, "Cannot list properties, treating type as a leaf");
                return Ok(());
            }
        };

        for property in properties {
            let path = join_path(prefix, &property.name);

            if self.exclude_if_out_of_range(type_name, &property, &path)? || !property.is_complex {
                continue;
            }

            if self.ancestors.iter().any(|ancestor| *ancestor == property.type_name) {
                debug!(path = %path, type_name = %property.type_name, "Recursive type reference, not descending");
                continue;
            }

            self.ancestors.push(property.type_name.clone());
            let result = self.visit(&path, &property.type_name);
            self.ancestors.pop();
            result?;
        }

        Ok(())
    }

    /// Record `path` as excluded when the property's bounds do not contain the
    /// requested version. Returns whether it was excluded.
    fn exclude_if_out_of_range(
        &mut self,
        type_name: &str,
        property: &PropertyDescriptor,
        path: &str,
    ) -> Result<bool> {
        let bounds = match self.provider.version_range_of(type_name, &property.name) {
            Ok(Some(bounds)) => bounds,
            Ok(None) => return Ok(false),
            Err(e) => {
                warn!(type_name, path, error = %e, "Cannot read version bounds, treating property as unconstrained");
                return Ok(false);
            }
        };

        let range = VersionRange::from_bounds(&bounds)?;
        if self.target.is_none() {
            self.target = Some(Version::parse(self.requested)?);
        }
        let visible = match &self.target {
            Some(target) => range.contains(target)?,
            None => true,
        };
        if visible {
            return Ok(false);
        }

        self.excluded.insert(path);
        self.notify(&ExclusionEvent {
            since: bounds.since,
            requested: self.requested.to_string(),
            until: bounds.until,
            path: path.to_string(),
        });

        Ok(true)
    }

    /// Hand `event` to the sink, dropping it if the sink panics
    ///
    /// The result never changes, but the process panic hook still runs, so
    /// the default hook prints the panic message to stderr. Callers that need
    /// silence install their own hook with [`std::panic::set_hook`].
    fn notify(&self, event: &ExclusionEvent) {
        let sink = self.sink;
        if panic::catch_unwind(AssertUnwindSafe(|| sink.record(event))).is_err() {
            warn!(path = %event.path, "Diagnostics sink panicked, event dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::error::Error;
    use crate::registry::{FieldSchema, SchemaRegistry, TypeSchema};

    fn person_schema() -> SchemaRegistry {
        SchemaRegistry::new()
            .with_type(
                "Person",
                TypeSchema::new()
                    .field(FieldSchema::new("name", "string"))
                    .field(FieldSchema::new("address", "Address")),
            )
            .with_type(
                "Address",
                TypeSchema::new()
                    .field(FieldSchema::new("street", "string"))
                    .field(FieldSchema::new("zip", "string").since("2.0").until("9999")),
            )
    }

    #[test]
    fn test_nested_path() {
        let excluded = compute_exclusions(&person_schema(), "Person", "1.0").unwrap();
        assert_eq!(excluded.to_vec(), vec!["address.zip"]);

        let excluded = compute_exclusions(&person_schema(), "Person", "2.0").unwrap();
        assert!(excluded.is_empty());
    }

    #[test]
    fn test_events_recorded() {
        let registry = person_schema();
        let calculator = ExclusionCalculator::new(&registry).with_sink(CollectingSink::new());
        calculator.compute("Person", "1.0").unwrap();

        let events = calculator.sink().events();
        assert_eq!(
            events,
            vec![ExclusionEvent {
                since: "2.0".to_string(),
                requested: "1.0".to_string(),
                until: "9999".to_string(),
                path: "address.zip".to_string(),
            }]
        );
    }

    #[test]
    fn test_malformed_target_only_fails_when_needed() {
        let unversioned = SchemaRegistry::new().with_type(
            "Note",
            TypeSchema::new().field(FieldSchema::new("body", "string")),
        );
        assert!(compute_exclusions(&unversioned, "Note", "1.x").unwrap().is_empty());

        let err = compute_exclusions(&person_schema(), "Person", "1.x").unwrap_err();
        assert!(matches!(err, Error::VersionFormat { .. }));
    }

    #[test]
    fn test_unknown_root_is_empty() {
        let excluded = compute_exclusions(&person_schema(), "Company", "1.0").unwrap();
        assert!(excluded.is_empty());
    }
}
