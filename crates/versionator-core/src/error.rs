//! Error types for the Versionator core library
//!
//! Two kinds of failure exist in the core:
//!
//! - [`Error`] is fatal. It aborts version parsing, comparison and the
//!   whole exclusion computation with no partial result.
//! - [`IntrospectionError`] is recoverable. A schema provider reports it when
//!   it cannot describe a type or a property; the calculator logs it and
//!   treats the affected property as unconstrained.
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Fatal errors raised by version handling and the exclusion walk
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A version string contains a token that is neither numeric nor a sentinel
    #[error("Invalid version format '{raw}': {reason}")]
    VersionFormat { raw: String, reason: String },

    /// A numeric version was compared against a textual one
    #[error("Cannot compare numeric version '{numeric}' to text-only version '{textual}'")]
    IncomparableVersions { numeric: String, textual: String },
}

impl Error {
    /// Create a version format error
    pub fn version_format(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::VersionFormat {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create an incomparable versions error
    pub fn incomparable(numeric: impl Into<String>, textual: impl Into<String>) -> Self {
        Self::IncomparableVersions {
            numeric: numeric.into(),
            textual: textual.into(),
        }
    }
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable failures reported by a [`SchemaProvider`](crate::SchemaProvider)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntrospectionError {
    /// The provider has no description for the requested type
    #[error("Unknown type '{type_name}'")]
    UnknownType { type_name: String },

    /// The type exists but does not declare the requested property
    #[error("Type '{type_name}' has no property '{property}'")]
    UnknownProperty { type_name: String, property: String },

    /// Provider specific failure
    #[error("Cannot introspect '{type_name}': {message}")]
    Other { type_name: String, message: String },
}

impl IntrospectionError {
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    pub fn unknown_property(type_name: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            type_name: type_name.into(),
            property: property.into(),
        }
    }

    pub fn other(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Other {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}
