//! Schema document loading
//!
//! This module provides:
//! - YAML and JSON parsing of schema documents into a `SchemaRegistry`
//! - Structural validation (undeclared types, malformed or empty bounds)
//! - Strict and lenient loading modes
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use versionator_schemas::loader::SchemaLoader;
//! use std::path::Path;
//!
//! let loader = SchemaLoader::new();
//! let registry = loader.load_file(Path::new("schema.yaml"))?;
//! println!("Loaded {} types", registry.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;
pub mod schema_loader;
pub mod validation;

pub use error::{LoaderError, LoaderResult};
pub use parser::Format;
pub use schema_loader::{LoaderConfig, SchemaLoader};
pub use validation::{validate_registry, IssueKind, SchemaIssue, Severity};
