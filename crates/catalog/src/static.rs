// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Static Catalog
//!
//! This module provides a catalog implementation over predefined schema
//! metadata, used by tooling and tests that do not sit on a live
//! metadata source.

use async_trait::async_trait;

use crate::error::{CatalogError, CatalogResult};
use crate::r#trait::Catalog;
use ontomap_ir::{AttributeMetadata, Dialect, RelationMetadata};

/// Catalog over a fixed list of relation definitions
pub struct StaticCatalog {
    relations: Vec<RelationMetadata>,
    dialect: Dialect,
}

impl StaticCatalog {
    /// Create a static catalog from relation metadata
    pub fn new(relations: Vec<RelationMetadata>, dialect: Dialect) -> Self {
        Self { relations, dialect }
    }

    /// Number of relations in this catalog
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Whether this catalog is empty
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(Vec::new(), Dialect::default())
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn list_relations(&self) -> CatalogResult<Vec<RelationMetadata>> {
        Ok(self.relations.clone())
    }

    async fn get_attributes(
        &self,
        schema: Option<&str>,
        name: &str,
    ) -> CatalogResult<Vec<AttributeMetadata>> {
        self.relations
            .iter()
            .find(|r| r.name == name && r.schema.as_deref() == schema)
            .map(|r| r.attributes.clone())
            .ok_or_else(|| CatalogError::RelationNotFound {
                name: name.to_string(),
                schema: schema.map(|s| s.to_string()),
            })
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}
