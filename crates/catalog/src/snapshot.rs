// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog snapshots
//!
//! This module defines the immutable, fully-normalized catalog view the
//! resolver works against.
//!
//! ## Design
//!
//! A [`CatalogSnapshot`] is built once — from any [`Catalog`]
//! implementation or directly from metadata — and then shared
//! read-only. All identifier normalization happens here, so resolution
//! itself is synchronous in-memory map reads with no further folding or
//! quoting logic. Independent statements may be resolved in parallel
//! against one snapshot; nothing in it is mutated after construction.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::r#trait::Catalog;
use ontomap_ir::{
    DataType, Dialect, Identifier, QuotingConfig, RelationMetadata, RelationRef,
};

/// One attribute of a normalized relation definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeDef {
    /// Normalized attribute name
    pub name: Identifier,
    /// Data type
    pub data_type: DataType,
    /// Whether the attribute is nullable
    pub nullable: bool,
}

/// A normalized relation definition
///
/// Attribute order is preserved from the catalog metadata; it is the
/// order `SELECT *` expands to. Immutable for the duration of every
/// resolution pass that sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationDefinition {
    /// The relation's own reference in the catalog
    pub reference: RelationRef,
    /// Attributes, in declaration order
    pub attributes: Vec<AttributeDef>,
}

impl RelationDefinition {
    /// Find an attribute by normalized name
    pub fn attribute(&self, name: &Identifier) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| &a.name == name)
    }

    /// Whether an attribute with this normalized name exists
    pub fn has_attribute(&self, name: &Identifier) -> bool {
        self.attribute(name).is_some()
    }
}

/// Immutable, normalized catalog view
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    definitions: IndexMap<RelationRef, RelationDefinition>,
    by_name: HashMap<Identifier, Vec<RelationRef>>,
    quoting: QuotingConfig,
}

impl CatalogSnapshot {
    /// Build a snapshot directly from relation metadata
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidSchema` if two relations normalize
    /// to the same reference.
    pub fn from_metadata(
        relations: Vec<RelationMetadata>,
        dialect: Dialect,
    ) -> CatalogResult<Self> {
        let quoting = dialect.quoting();
        let mut definitions = IndexMap::new();
        let mut by_name: HashMap<Identifier, Vec<RelationRef>> = HashMap::new();

        for relation in relations {
            let reference =
                RelationRef::normalize(relation.schema.as_deref(), &relation.name, &quoting);

            let attributes = relation
                .attributes
                .iter()
                .map(|a| AttributeDef {
                    name: Identifier::normalize(&a.name, &quoting),
                    data_type: a.data_type.clone(),
                    nullable: a.nullable,
                })
                .collect();

            let definition = RelationDefinition {
                reference: reference.clone(),
                attributes,
            };

            if definitions.insert(reference.clone(), definition).is_some() {
                return Err(CatalogError::InvalidSchema(format!(
                    "duplicate relation {reference}"
                )));
            }
            by_name
                .entry(reference.name.clone())
                .or_default()
                .push(reference);
        }

        debug!(relations = definitions.len(), "catalog snapshot built");

        Ok(Self {
            definitions,
            by_name,
            quoting,
        })
    }

    /// Load a snapshot from a catalog
    pub async fn load(catalog: &dyn Catalog) -> CatalogResult<Self> {
        let relations = catalog.list_relations().await?;
        Self::from_metadata(relations, catalog.dialect())
    }

    /// The quotation-style configuration in force
    pub fn quoting(&self) -> &QuotingConfig {
        &self.quoting
    }

    /// Look up a relation definition
    ///
    /// An exact reference match wins. A schema-less reference also
    /// matches a schema-qualified catalog entry when the name identifies
    /// it uniquely; an ambiguous name-only match is `None` (callers
    /// surface it as an unknown relation rather than picking a schema).
    pub fn lookup(&self, reference: &RelationRef) -> Option<&RelationDefinition> {
        if let Some(definition) = self.definitions.get(reference) {
            return Some(definition);
        }

        if reference.schema.is_none() {
            if let Some(candidates) = self.by_name.get(&reference.name) {
                if let [only] = candidates.as_slice() {
                    return self.definitions.get(only);
                }
            }
        }

        None
    }

    /// Number of relations in the snapshot
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over the relation definitions, in catalog order
    pub fn relations(&self) -> impl Iterator<Item = &RelationDefinition> {
        self.definitions.values()
    }
}
