// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog trait for database schema abstraction
//!
//! This module defines the async Catalog trait used for querying database
//! schema information.

use crate::error::CatalogResult;
use ontomap_ir::{AttributeMetadata, Dialect, RelationMetadata};

/// Catalog trait for database schema abstraction
///
/// This trait provides an async interface for querying schema
/// information. Implementations can read from static definitions,
/// mapping bundles, or database metadata sources; the resolver never
/// talks to a `Catalog` directly — it consumes an immutable
/// [`CatalogSnapshot`](crate::CatalogSnapshot) built from one.
///
/// # Examples
///
/// ```rust,ignore
/// use ontomap_catalog::{Catalog, CatalogError};
///
/// async fn relation_names(catalog: &impl Catalog) -> Result<Vec<String>, CatalogError> {
///     let relations = catalog.list_relations().await?;
///     Ok(relations.into_iter().map(|r| r.name).collect())
/// }
/// ```
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// List all relations known to this catalog
    ///
    /// Returns metadata for every relation a mapping may reference,
    /// including views. Attribute order within each relation is the
    /// order `SELECT *` expands to.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ConnectionFailed` if the metadata source
    /// cannot be reached.
    async fn list_relations(&self) -> CatalogResult<Vec<RelationMetadata>>;

    /// Get attribute metadata for a specific relation
    ///
    /// # Arguments
    ///
    /// * `schema` - Optional schema qualifier
    /// * `name` - Relation name
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::RelationNotFound` if the relation doesn't
    /// exist.
    async fn get_attributes(
        &self,
        schema: Option<&str>,
        name: &str,
    ) -> CatalogResult<Vec<AttributeMetadata>>;

    /// The dialect this catalog's metadata source speaks
    ///
    /// Decides the quotation-style configuration used when the
    /// snapshot normalizes identifiers.
    fn dialect(&self) -> Dialect;
}
