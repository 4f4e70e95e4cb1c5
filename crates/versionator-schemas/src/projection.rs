//! Apply exclusion sets to JSON documents
//!
//! Paths in an [`ExclusionSet`] name object keys only. Arrays are traversed
//! transparently, so `items.price` removes `price` from every element of the
//! `items` array.
//!
//! Keys are joined with `.` and not escaped, so a document key that contains
//! a dot is indistinguishable from the nested path it spells: excluding
//! `a.b` removes both the inner `b` of `{"a": {"b": 1}}` and the top-level
//! key of `{"a.b": 1}`.
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use versionator_core::{compute_exclusions, join_path, ExclusionSet, Result, SchemaProvider};

/// Remove every excluded path from `value` in place, returning the number of
/// removed fields
pub fn project(value: &mut Value, excluded: &ExclusionSet) -> usize {
    if excluded.is_empty() {
        return 0;
    }
    project_at(value, "", excluded)
}

/// Copying variant of [`project`]
pub fn projected(value: &Value, excluded: &ExclusionSet) -> Value {
    let mut copy = value.clone();
    project(&mut copy, excluded);
    copy
}

/// Compute the exclusions of `root_type` at `version` and apply them to `value`
pub fn project_at_version<P>(
    provider: &P,
    root_type: &str,
    version: &str,
    value: &mut Value,
) -> Result<ExclusionSet>
where
    P: SchemaProvider + ?Sized,
{
    let excluded = compute_exclusions(provider, root_type, version)?;
    let removed = project(value, &excluded);
    tracing::debug!(root_type, version, removed, "Projected document");
    Ok(excluded)
}

fn project_at(value: &mut Value, prefix: &str, excluded: &ExclusionSet) -> usize {
    match value {
        Value::Object(map) => {
            let before = map.len();
            map.retain(|key, _| !excluded.contains(&join_path(prefix, key)));
            let removed = before - map.len();

            removed
                + map
                    .iter_mut()
                    .map(|(key, child)| project_at(child, &join_path(prefix, key), excluded))
                    .sum::<usize>()
        }
        Value::Array(items) => items
            .iter_mut()
            .map(|item| project_at(item, prefix, excluded))
            .sum(),
        _ => 0,
    }
}
