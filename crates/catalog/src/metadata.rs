// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata types for database schema information
//!
//! This module re-exports the schema metadata types from the
//! `ontomap-ir` crate.

// Re-export all metadata types from the ir crate
pub use ontomap_ir::{AttributeMetadata, DataType, RelationMetadata};
