//! Versionator Schemas - schema documents and projections
//!
//! This crate provides the adapters around the exclusion engine in
//! `versionator-core`:
//! - **Loader**: read schema documents (YAML or JSON) into a
//!   [`SchemaRegistry`](versionator_core::SchemaRegistry), with structural
//!   validation of types and version bounds
//! - **Projection**: remove excluded paths from `serde_json` documents
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use versionator_schemas::{loader::{Format, SchemaLoader}, projection};
//!
//! let registry = SchemaLoader::new().load_str(
//!     r#"
//! types:
//!   Person:
//!     fields:
//!       - { name: name, type: string }
//!       - { name: email, type: string, since: "2.0" }
//! "#,
//!     Format::Yaml,
//! )?;
//!
//! let mut person = json!({"name": "Ada", "email": "ada@example.com"});
//! projection::project_at_version(&registry, "Person", "1.0", &mut person)?;
//! assert_eq!(person, json!({"name": "Ada"}));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod projection;

// Re-export commonly used types for convenience
pub use loader::{
    validate_registry, Format, IssueKind, LoaderConfig, LoaderError, LoaderResult, SchemaIssue,
    SchemaLoader, Severity,
};
pub use projection::{project, project_at_version, projected};
