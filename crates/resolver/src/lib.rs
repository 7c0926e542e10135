// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # ontomap - SQL Scope Resolution
//!
//! This crate binds parsed SQL `SELECT` statements against a catalog
//! snapshot, producing a tree of resolved lexical [`Scope`]s: which
//! relations are referenced under which aliases, what attributes each
//! scope exposes, and what equality relationships its joins imply. The
//! Datalog rule generator and the meta-mapping expander consume this
//! model instead of the raw syntax tree.
//!
//! ## Overview
//!
//! ```rust
//! use ontomap_catalog::CatalogSnapshot;
//! use ontomap_ir::{
//!     AttributeMetadata, DataType, Dialect, Query, RelationMetadata, SelectItem,
//!     SelectStatement, TableFactor, TableWithJoins,
//! };
//! use ontomap_resolver::resolve;
//!
//! let relations = vec![RelationMetadata::new("PERSON").with_attributes(vec![
//!     AttributeMetadata::new("idPerson", DataType::Integer).with_primary_key(),
//!     AttributeMetadata::new("name", DataType::Varchar(Some(100))),
//! ])];
//! let snapshot = CatalogSnapshot::from_metadata(relations, Dialect::H2).unwrap();
//!
//! // SELECT * FROM PERSON
//! let query = Query::select(
//!     SelectStatement::default()
//!         .with_projection(vec![SelectItem::Wildcard])
//!         .with_from(vec![TableWithJoins::new(TableFactor::relation("PERSON"))]),
//! );
//!
//! let scope = resolve(&query, &snapshot).unwrap();
//! assert_eq!(scope.relations.len(), 1);
//! assert_eq!(scope.projected_attributes.len(), 2);
//! ```
//!
//! ## Failure model
//!
//! Resolution returns on the first error; a half-built scope is never
//! exposed. [`ResolutionError::is_structural`] separates unsupported
//! query shapes (which the mapping loader may wrap in an opaque view)
//! from genuinely broken mappings (unknown relations, unknown or
//! ambiguous attributes, missing aliases).
//!
//! ## Concurrency
//!
//! A resolution call is synchronous and touches only its own scope
//! under construction plus an immutable [`CatalogSnapshot`]. Resolving
//! independent statements in parallel against one published snapshot
//! requires no synchronization.
//!
//! [`CatalogSnapshot`]: ontomap_catalog::CatalogSnapshot

pub mod assembler;
pub mod attribute;
pub mod condition;
pub mod error;
pub mod from_item;
pub mod functions;
pub mod join;
pub mod projection;
pub mod resolved;
pub mod scope;

// Re-export commonly used types
pub use assembler::resolve;
pub use attribute::resolve_attribute;
pub use error::{ResolutionError, ResolutionResult};
pub use functions::SupportedFunction;
pub use resolved::ResolvedExpr;
pub use scope::{JoinDescriptor, Scope};
