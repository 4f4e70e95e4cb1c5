//! Schema description capability consumed by the exclusion calculator
//!
//! The calculator never inspects live objects. It asks a [`SchemaProvider`]
//! for the properties a type declares and for the version bounds attached to
//! each property. [`SchemaRegistry`](crate::SchemaRegistry) is the bundled
//! implementation; callers with their own schema source implement the trait
//! directly.
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

use crate::error::IntrospectionError;
use crate::version::{BEGINNING_OF_TIME, END_OF_TIME};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Type names that are always opaque leaves, never walked into
pub const LEAF_TYPES: &[&str] = &[
    // text
    "string", "str", "char", "text",
    // logic
    "bool", "boolean",
    // integers
    "int", "integer", "long", "short", "byte",
    "i8", "i16", "i32", "i64", "i128", "isize",
    "u8", "u16", "u32", "u64", "u128", "usize",
    // floating point and decimals
    "float", "double", "number", "f32", "f64", "decimal", "bigint", "bigdecimal",
    // time
    "date", "time", "datetime", "timestamp", "duration", "instant",
    // identifiers and opaque payloads
    "uuid", "url", "uri", "bytes", "binary", "json", "any",
];

/// Check whether a declared type name is an opaque leaf (case-insensitive)
pub fn is_leaf_type(type_name: &str) -> bool {
    LEAF_TYPES
        .iter()
        .any(|leaf| leaf.eq_ignore_ascii_case(type_name))
}

/// A property declared by a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name, used as the path segment
    pub name: String,
    /// Declared type of the property
    pub type_name: String,
    /// Whether the declared type has nested properties worth walking
    pub is_complex: bool,
}

impl PropertyDescriptor {
    /// Describe a property, deriving complexity from the leaf type set
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            name: name.into(),
            is_complex: !is_leaf_type(&type_name),
            type_name,
        }
    }
}

/// Raw, unparsed version bounds attached to a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionBounds {
    #[serde(default = "default_since")]
    pub since: String,
    #[serde(default = "default_until")]
    pub until: String,
}

fn default_since() -> String {
    BEGINNING_OF_TIME.to_string()
}

fn default_until() -> String {
    END_OF_TIME.to_string()
}

impl VersionBounds {
    pub fn new(since: impl Into<String>, until: impl Into<String>) -> Self {
        Self {
            since: since.into(),
            until: until.into(),
        }
    }

    /// Bounds open at the upper end
    pub fn since(since: impl Into<String>) -> Self {
        Self::new(since, END_OF_TIME)
    }

    /// Bounds open at the lower end
    pub fn until(until: impl Into<String>) -> Self {
        Self::new(BEGINNING_OF_TIME, until)
    }
}

/// Source of type and property metadata.
///
/// Implementations are only ever read. A provider that is `Sync` can serve
/// concurrent exclusion computations without locking.
pub trait SchemaProvider {
    /// List the properties declared by `type_name`, in declaration order
    fn properties_of(&self, type_name: &str) -> Result<Vec<PropertyDescriptor>, IntrospectionError>;

    /// Version bounds of a property, `None` when it carries no constraint
    fn version_range_of(
        &self,
        type_name: &str,
        property: &str,
    ) -> Result<Option<VersionBounds>, IntrospectionError>;
}

impl<P: SchemaProvider + ?Sized> SchemaProvider for &P {
    fn properties_of(&self, type_name: &str) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        (**self).properties_of(type_name)
    }

    fn version_range_of(
        &self,
        type_name: &str,
        property: &str,
    ) -> Result<Option<VersionBounds>, IntrospectionError> {
        (**self).version_range_of(type_name, property)
    }
}

impl<P: SchemaProvider + ?Sized> SchemaProvider for Box<P> {
    fn properties_of(&self, type_name: &str) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        (**self).properties_of(type_name)
    }

    fn version_range_of(
        &self,
        type_name: &str,
        property: &str,
    ) -> Result<Option<VersionBounds>, IntrospectionError> {
        (**self).version_range_of(type_name, property)
    }
}

impl<P: SchemaProvider + ?Sized> SchemaProvider for Arc<P> {
    fn properties_of(&self, type_name: &str) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        (**self).properties_of(type_name)
    }

    fn version_range_of(
        &self,
        type_name: &str,
        property: &str,
    ) -> Result<Option<VersionBounds>, IntrospectionError> {
        (**self).version_range_of(type_name, property)
    }
}
