// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for scope resolution
//!
//! This module defines the resolution error taxonomy.
//!
//! Every error is fatal to the current resolution call: the resolver
//! returns on the first failure and never exposes a half-built scope.
//! Callers distinguish [`ResolutionError::UnsupportedConstruct`]
//! (structural — the mapping loader may fall back to an opaque view)
//! from the remaining kinds (semantic — the mapping itself is broken
//! and must be reported, not masked).

use serde::Serialize;
use thiserror::Error;

/// Result type alias for resolution operations
pub type ResolutionResult<T> = Result<T, ResolutionError>;

/// Errors that can occur during scope resolution
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum ResolutionError {
    /// A referenced relation, sub-select alias, or schema-qualified name
    /// does not exist in the catalog or current scope
    #[error("Unknown relation: {reference}")]
    UnknownRelation { reference: String },

    /// A referenced attribute does not exist in the relation(s) it is or
    /// could be qualified by
    #[error("Unknown attribute: {reference}")]
    UnknownAttribute { reference: String },

    /// An unqualified reference matches more than one visible attribute,
    /// or a name cannot be uniquely resolved on one side of a join
    #[error("Ambiguous attribute reference: {reference} (matches {candidates:?})")]
    AmbiguousAttribute {
        reference: String,
        candidates: Vec<String>,
    },

    /// A sub-select or a non-trivial projected expression lacks a
    /// required alias
    #[error("Missing alias for {context}")]
    MissingAlias { context: String },

    /// A syntactic feature outside the supported subset
    #[error("Unsupported construct: {construct}")]
    UnsupportedConstruct { construct: String },
}

impl ResolutionError {
    /// Shorthand for an unsupported-construct error
    pub fn unsupported(construct: impl Into<String>) -> Self {
        ResolutionError::UnsupportedConstruct {
            construct: construct.into(),
        }
    }

    /// Whether this failure is structural rather than semantic
    ///
    /// Structural failures mean the query shape is outside the
    /// supported subset; the mapping loader may substitute an opaque
    /// view and retry. Semantic failures mean the mapping references
    /// schema objects incorrectly and must be surfaced as-is.
    pub fn is_structural(&self) -> bool {
        matches!(self, ResolutionError::UnsupportedConstruct { .. })
    }
}
