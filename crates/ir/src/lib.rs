// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # ontomap - Intermediate Representation
//!
//! This crate defines the data model shared across the ontomap
//! toolchain:
//!
//! - the SQL `SELECT` AST subset produced by the external parser
//!   ([`Query`], [`SelectStatement`], [`Expr`], ...);
//! - the normalized identifier model ([`Identifier`], [`RelationRef`],
//!   [`QualifiedAttributeRef`]) and the quoting rules that drive it;
//! - the raw schema metadata types a catalog reports
//!   ([`RelationMetadata`], [`AttributeMetadata`], [`DataType`]);
//! - the target [`Dialect`] enumeration.
//!
//! ## Identifier normalization
//!
//! Raw lexemes are canonicalized exactly once, at construction:
//!
//! ```rust
//! use ontomap_ir::{Dialect, Identifier};
//!
//! let config = Dialect::Oracle.quoting();
//! let quoted = Identifier::normalize("\"Foo\"", &config);
//! let bare = Identifier::normalize("foo", &config);
//!
//! assert_eq!(quoted.as_str(), "Foo");
//! assert_eq!(bare.as_str(), "FOO");
//! ```
//!
//! ## AST conventions
//!
//! AST strings are raw lexemes (quoting intact); the resolver treats
//! the tree as read-only and normalizes identifiers itself. Unsupported
//! node kinds are dedicated variants, so downstream `match`es stay
//! exhaustive and rejection is explicit.

pub mod dialect;
pub mod expr;
pub mod ident;
pub mod metadata;
pub mod query;

// Re-export commonly used types
pub use dialect::Dialect;
pub use expr::{BinaryOp, ColumnRef, Expr, Literal, UnaryOp};
pub use ident::{CaseFold, Identifier, QualifiedAttributeRef, QuotingConfig, RelationRef};
pub use metadata::{AttributeMetadata, DataType, RelationMetadata};
pub use query::{
    CommonTableExpr, Join, JoinCondition, JoinType, OrderByItem, Query, SelectItem,
    SelectStatement, SetOp, TableFactor, TableWithJoins,
};
