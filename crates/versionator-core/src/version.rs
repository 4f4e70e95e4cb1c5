//! Loosely structured version identifiers and their ordering
//!
//! A [`Version`] keeps the raw text it was built from and, when the text is
//! numeric, the sequence of integer components (`"2.0.1.52"` becomes
//! `[2, 0, 1, 52]`). Components may be separated by any run of characters
//! that are neither letters nor digits, so `"1.2"`, `"1-2-3"` and `"1.2-3"`
//! are all accepted. Text without any digit (`"latest"`) is kept as a
//! text-only version and orders lexicographically against other text-only
//! versions.
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::schema::VersionBounds;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Reserved token for the lowest possible version
pub const BEGINNING_OF_TIME: &str = "beginning-of-time";

/// Reserved token for the highest possible version
pub const END_OF_TIME: &str = "end-of-time";

/// A parsed, comparable version identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    raw: String,
    parts: Option<Vec<i64>>,
}

impl Version {
    /// Parse a version string
    pub fn parse(raw: &str) -> Result<Self> {
        let parts = match raw {
            BEGINNING_OF_TIME => Some(vec![i64::MIN]),
            END_OF_TIME => Some(vec![i64::MAX]),
            _ => parse_parts(raw)?,
        };

        Ok(Self {
            raw: raw.to_string(),
            parts,
        })
    }

    /// The "beginning of time" sentinel, lower than every numeric version
    pub fn beginning() -> Self {
        Self {
            raw: BEGINNING_OF_TIME.to_string(),
            parts: Some(vec![i64::MIN]),
        }
    }

    /// The "end of time" sentinel, higher than every numeric version
    pub fn end() -> Self {
        Self {
            raw: END_OF_TIME.to_string(),
            parts: Some(vec![i64::MAX]),
        }
    }

    /// The original text, verbatim
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Numeric components, absent for text-only versions
    pub fn parts(&self) -> Option<&[i64]> {
        self.parts.as_deref()
    }

    pub fn is_numeric(&self) -> bool {
        self.parts.is_some()
    }

    pub fn is_sentinel(&self) -> bool {
        self.raw == BEGINNING_OF_TIME || self.raw == END_OF_TIME
    }

    /// Compare two versions.
    ///
    /// Numeric versions are compared component by component after padding
    /// the shorter one with trailing zeros, so `1.2 == 1.2.0` and
    /// `2.0 < 2.0.1`. Text-only versions compare by their raw text. Mixing
    /// the two is an error.
    pub fn compare(&self, other: &Version) -> Result<Ordering> {
        match (&self.parts, &other.parts) {
            (Some(ours), Some(theirs)) => Ok(compare_parts(ours, theirs)),
            (None, None) => Ok(self.raw.cmp(&other.raw)),
            (Some(_), None) => Err(Error::incomparable(&self.raw, &other.raw)),
            (None, Some(_)) => Err(Error::incomparable(&other.raw, &self.raw)),
        }
    }

    /// Check whether this version lies within `[since, until]`, both inclusive
    pub fn is_valid(&self, since: &Version, until: &Version) -> Result<bool> {
        Ok(self.compare(since)?.is_ge() && self.compare(until)?.is_le())
    }
}

/// Split `raw` into numeric components, or `None` for text-only versions
fn parse_parts(raw: &str) -> Result<Option<Vec<i64>>> {
    if raw.is_empty() {
        return Err(Error::version_format(raw, "version string is empty"));
    }

    if !raw.bytes().any(|b| b.is_ascii_digit()) {
        return Ok(None);
    }

    let trimmed = raw.trim_end_matches(is_separator);
    if trimmed.starts_with(is_separator) {
        return Err(Error::version_format(raw, "version starts with a separator"));
    }

    trimmed
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(|token| parse_component(raw, token))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn parse_component(raw: &str, token: &str) -> Result<i64> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::version_format(
            raw,
            format!("component '{}' is not numeric", token),
        ));
    }

    token.parse().map_err(|_| {
        Error::version_format(raw, format!("component '{}' is out of range", token))
    })
}

// Letters of any script stay inside their token so they fail as non-numeric
fn is_separator(c: char) -> bool {
    !c.is_alphanumeric()
}

fn compare_parts(ours: &[i64], theirs: &[i64]) -> Ordering {
    let len = ours.len().max(theirs.len());
    (0..len)
        .map(|i| {
            let a = ours.get(i).copied().unwrap_or(0);
            let b = theirs.get(i).copied().unwrap_or(0);
            a.cmp(&b)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.raw
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd for Version {
    /// `None` when comparing a numeric version to a text-only one
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

/// Inclusive version range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRange {
    pub since: Version,
    pub until: Version,
}

impl VersionRange {
    pub fn new(since: Version, until: Version) -> Self {
        Self { since, until }
    }

    /// Range covering every numeric version
    pub fn unbounded() -> Self {
        Self::new(Version::beginning(), Version::end())
    }

    /// Parse both bounds
    pub fn parse(since: &str, until: &str) -> Result<Self> {
        Ok(Self::new(Version::parse(since)?, Version::parse(until)?))
    }

    /// Build a range from the raw bounds reported by a schema provider
    pub fn from_bounds(bounds: &VersionBounds) -> Result<Self> {
        Self::parse(&bounds.since, &bounds.until)
    }

    /// Check whether a version falls within this range
    pub fn contains(&self, version: &Version) -> Result<bool> {
        version.is_valid(&self.since, &self.until)
    }

    /// A range is empty when its lower bound is above its upper bound
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.since.compare(&self.until)?.is_gt())
    }
}

impl Default for VersionRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.since, self.until)
    }
}
