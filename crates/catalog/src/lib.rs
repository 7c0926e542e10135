// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # ontomap - Catalog Layer
//!
//! This crate provides the schema catalog consumed during SQL
//! resolution. It defines:
//!
//! - the async [`Catalog`] trait over schema metadata sources;
//! - [`StaticCatalog`], an in-memory implementation for tooling and
//!   tests;
//! - [`CatalogSnapshot`], the immutable normalized view the resolver
//!   reads.
//!
//! ## Architecture
//!
//! Catalog implementations may do I/O; the resolver never does. The
//! snapshot is the boundary: it is loaded once (normalizing every
//! identifier according to the catalog's dialect), then published
//! read-only. Resolution of independent statements can proceed in
//! parallel against the same snapshot with no synchronization.
//!
//! ## Usage
//!
//! ```rust
//! use ontomap_catalog::{CatalogSnapshot, StaticCatalog};
//! use ontomap_ir::{AttributeMetadata, DataType, Dialect, RelationMetadata, RelationRef};
//!
//! let relations = vec![RelationMetadata::new("PERSON").with_attributes(vec![
//!     AttributeMetadata::new("idPerson", DataType::Integer).with_primary_key(),
//! ])];
//!
//! let snapshot = CatalogSnapshot::from_metadata(relations, Dialect::H2).unwrap();
//! let reference = RelationRef::normalize(None, "person", snapshot.quoting());
//! assert!(snapshot.lookup(&reference).is_some());
//! ```

pub mod error;
pub mod metadata;
pub mod snapshot;
pub mod r#static;
pub mod r#trait;

// Re-exports
pub use error::{CatalogError, CatalogResult};
pub use metadata::{AttributeMetadata, DataType, RelationMetadata};
pub use snapshot::{AttributeDef, CatalogSnapshot, RelationDefinition};
pub use r#static::StaticCatalog;
pub use r#trait::Catalog;
