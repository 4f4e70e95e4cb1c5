//! Versionator Core - version-aware field exclusion for evolving schemas
//!
//! This crate decides, for a requested version and a schema whose fields
//! carry `since`/`until` bounds, which field paths must be hidden when an
//! object is presented at that version.
//!
//! # Main Components
//!
//! - **Version**: loosely structured version identifiers with a total order,
//!   zero padding of short versions and "beginning/end of time" sentinels
//! - **Schema Provider**: the trait through which types and their versioned
//!   fields are described, with [`SchemaRegistry`] as a ready-made
//!   registration map
//! - **Exclusion Calculator**: the recursive schema walk producing the set
//!   of excluded dot-delimited paths
//! - **Diagnostics**: injectable sinks notified of every exclusion
//!
//! # Example
//!
//! ```rust
//! use versionator_core::{compute_exclusions, FieldSchema, SchemaRegistry, TypeSchema};
//!
//! let registry = SchemaRegistry::new()
//!     .with_type(
//!         "Person",
//!         TypeSchema::new()
//!             .field(FieldSchema::new("name", "string"))
//!             .field(FieldSchema::new("address", "Address")),
//!     )
//!     .with_type(
//!         "Address",
//!         TypeSchema::new().field(FieldSchema::new("zip", "string").since("2.0")),
//!     );
//!
//! let excluded = compute_exclusions(&registry, "Person", "1.0")?;
//! assert!(excluded.contains("address.zip"));
//! # Ok::<(), versionator_core::Error>(())
//! ```
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

pub mod calculator;
pub mod diagnostics;
pub mod error;
pub mod exclusion;
pub mod registry;
pub mod schema;
pub mod version;

// Re-export main types for convenience
pub use calculator::{compute_exclusions, ExclusionCalculator};
pub use diagnostics::{CollectingSink, DiagnosticsSink, ExclusionEvent, NoopSink, TracingSink};
pub use error::{Error, IntrospectionError, Result};
pub use exclusion::{join_path, ExclusionSet, PATH_SEPARATOR};
pub use registry::{FieldSchema, SchemaRegistry, TypeSchema};
pub use schema::{is_leaf_type, PropertyDescriptor, SchemaProvider, VersionBounds, LEAF_TYPES};
pub use version::{Version, VersionRange, BEGINNING_OF_TIME, END_OF_TIME};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
