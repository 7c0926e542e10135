// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for Catalog operations
//!
//! This module defines the error types used throughout the catalog layer.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for Catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur during Catalog operations
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum CatalogError {
    /// Requested relation was not found
    #[error("Relation '{name}' not found{}", .schema.as_deref().map(|s| format!(" in schema '{s}'")).unwrap_or_default())]
    RelationNotFound {
        name: String,
        schema: Option<String>,
    },

    /// Failed to reach the metadata source
    #[error("Failed to connect to metadata source: {0}")]
    ConnectionFailed(String),

    /// The reported schema metadata is not usable
    #[error("Invalid schema metadata: {0}")]
    InvalidSchema(String),

    /// The specified feature is not supported by this catalog implementation
    #[error("Feature not supported: {0}")]
    NotSupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_relation_not_found() {
        let err = CatalogError::RelationNotFound {
            name: "PERSON".to_string(),
            schema: Some("hr".to_string()),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("PERSON"));
        assert!(msg.contains("hr"));

        let bare = CatalogError::RelationNotFound {
            name: "PERSON".to_string(),
            schema: None,
        };
        assert_eq!(format!("{}", bare), "Relation 'PERSON' not found");
    }

    #[test]
    fn test_error_display_invalid_schema() {
        let err = CatalogError::InvalidSchema("duplicate relation PERSON".to_string());
        assert!(format!("{}", err).contains("duplicate relation"));
    }
}
