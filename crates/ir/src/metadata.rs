// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata types for database schema information
//!
//! This module defines the raw schema metadata a catalog hands over:
//! relations and their ordered attribute lists. Names here are raw
//! lexemes exactly as the catalog source reported them; normalization
//! into identifiers happens once, when a snapshot is built.

use serde::{Deserialize, Serialize};

/// SQL data types (unified across dialects)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    // Numeric types
    Integer,
    BigInt,
    SmallInt,
    Decimal,
    Float,
    Double,

    // String types
    Varchar(Option<usize>),
    Char(Option<usize>),
    Text,

    // Date/Time types
    Date,
    Time,
    DateTime,
    Timestamp,

    // Boolean
    Boolean,

    // Unknown/Other (with original type name)
    Other(String),
}

/// Metadata for one attribute (column) of a relation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeMetadata {
    /// Attribute name, as reported by the catalog source
    pub name: String,
    /// Data type
    pub data_type: DataType,
    /// Whether the attribute is nullable
    pub nullable: bool,
    /// Whether this attribute is part of the primary key
    pub is_primary_key: bool,
}

impl AttributeMetadata {
    /// Create a new attribute metadata with builder pattern
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            is_primary_key: false,
        }
    }

    /// Builder method: set nullable
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Builder method: mark as primary key
    pub fn with_primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.nullable = false;
        self
    }
}

/// Metadata for one relation (table or view)
///
/// Attribute order is meaningful: it is the order `SELECT *` expands to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationMetadata {
    /// Schema/owner name, if the source reports one
    pub schema: Option<String>,
    /// Relation name
    pub name: String,
    /// Attribute definitions, in declaration order
    pub attributes: Vec<AttributeMetadata>,
    /// Relation comment/description
    pub comment: Option<String>,
}

impl RelationMetadata {
    /// Create new relation metadata with builder pattern
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            attributes: Vec::new(),
            comment: None,
        }
    }

    /// Builder method: set the schema
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Builder method: set the attributes
    pub fn with_attributes(mut self, attributes: Vec<AttributeMetadata>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builder method: set comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Get an attribute by its raw name
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeMetadata> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Get primary key attributes
    pub fn primary_keys(&self) -> Vec<&AttributeMetadata> {
        self.attributes.iter().filter(|a| a.is_primary_key).collect()
    }
}
