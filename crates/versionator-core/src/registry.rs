//! Explicit registration map of versioned types
//!
//! A [`SchemaRegistry`] maps type names to the fields they declare, each
//! field optionally tagged with `since`/`until` bounds. It can be built in
//! code or deserialized from a schema document:
//!
//! ```yaml
//! types:
//!   Person:
//!     fields:
//!       - { name: name, type: string }
//!       - { name: address, type: Address, since: "2.0" }
//!   Address:
//!     fields:
//!       - { name: zip, type: string, since: "2.0", until: "9999" }
//! ```
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

use crate::error::IntrospectionError;
use crate::schema::{PropertyDescriptor, SchemaProvider, VersionBounds};
use crate::version::{BEGINNING_OF_TIME, END_OF_TIME};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field declaration with optional version bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            since: None,
            until: None,
        }
    }

    /// Set the first version this field appears in
    pub fn since(mut self, version: impl Into<String>) -> Self {
        self.since = Some(version.into());
        self
    }

    /// Set the last version this field appears in
    pub fn until(mut self, version: impl Into<String>) -> Self {
        self.until = Some(version.into());
        self
    }

    /// Version bounds of this field. A single declared bound leaves the other
    /// end open; no bound at all means no constraint.
    pub fn bounds(&self) -> Option<VersionBounds> {
        if self.since.is_none() && self.until.is_none() {
            return None;
        }

        Some(VersionBounds::new(
            self.since.as_deref().unwrap_or(BEGINNING_OF_TIME),
            self.until.as_deref().unwrap_or(END_OF_TIME),
        ))
    }

    pub fn descriptor(&self) -> PropertyDescriptor {
        PropertyDescriptor::new(&self.name, &self.type_name)
    }
}

/// Ordered list of fields declared by a type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSchema {
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

impl TypeSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field declaration
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// In-memory schema provider keyed by type name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRegistry {
    #[serde(default)]
    types: BTreeMap<String, TypeSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type, replacing any previous declaration under that name
    pub fn register(&mut self, name: impl Into<String>, schema: TypeSchema) -> Option<TypeSchema> {
        self.types.insert(name.into(), schema)
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_type(mut self, name: impl Into<String>, schema: TypeSchema) -> Self {
        self.register(name, schema);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeSchema> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeSchema)> {
        self.types.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn type_schema(&self, type_name: &str) -> Result<&TypeSchema, IntrospectionError> {
        self.types
            .get(type_name)
            .ok_or_else(|| IntrospectionError::unknown_type(type_name))
    }
}

impl SchemaProvider for SchemaRegistry {
    fn properties_of(&self, type_name: &str) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        let schema = self.type_schema(type_name)?;
        Ok(schema.fields.iter().map(FieldSchema::descriptor).collect())
    }

    fn version_range_of(
        &self,
        type_name: &str,
        property: &str,
    ) -> Result<Option<VersionBounds>, IntrospectionError> {
        let field = self
            .type_schema(type_name)?
            .get(property)
            .ok_or_else(|| IntrospectionError::unknown_property(type_name, property))?;
        Ok(field.bounds())
    }
}
