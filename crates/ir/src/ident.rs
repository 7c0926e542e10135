// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Identifiers and references
//!
//! This module defines the normalized identifier type and the reference
//! types built from it.
//!
//! ## Design
//!
//! SQL identifiers arrive from the parser as raw lexemes: they may be
//! wrapped in dialect quoting delimiters (`"name"`, `` `name` ``,
//! `[name]`, `'name'`) or appear bare. An [`Identifier`] captures the
//! lexeme in its canonical form:
//!
//! - quoted lexemes keep their interior verbatim and compare
//!   case-sensitively;
//! - unquoted lexemes are case-folded according to the active
//!   [`QuotingConfig`] and compare on the folded form.
//!
//! Normalization happens exactly once, at construction. Equality and
//! hashing only see the canonical value, so `"Foo"` and `"foo"` are
//! distinct while `Foo` and `foo` (unquoted) are the same identifier.
//!
//! [`RelationRef`] (optional schema + name) is both a catalog key and an
//! in-scope alias key. [`QualifiedAttributeRef`] (optional owning
//! relation + attribute) is the universal key for every attribute table
//! in the resolved model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Case folding applied to unquoted identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseFold {
    /// Fold unquoted identifiers to upper case (Oracle, DB2, H2)
    Upper,
    /// Fold unquoted identifiers to lower case (PostgreSQL)
    Lower,
    /// Keep unquoted identifiers as written (MySQL, SQL Server)
    Preserve,
}

/// Quotation-style configuration for identifier normalization
///
/// Supplied by the catalog (see `Dialect::quoting`). The delimiters
/// decide which lexemes count as quoted; the fold decides how unquoted
/// lexemes are canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotingConfig {
    delimiters: Vec<(char, char)>,
    fold: CaseFold,
}

impl QuotingConfig {
    /// Create a configuration with the given fold and no delimiters
    pub fn new(fold: CaseFold) -> Self {
        Self {
            delimiters: Vec::new(),
            fold,
        }
    }

    /// Builder method: accept a delimiter pair
    pub fn with_delimiter(mut self, open: char, close: char) -> Self {
        self.delimiters.push((open, close));
        self
    }

    /// The standard delimiter set accepted in mapping files
    ///
    /// Mapping sources are written against many backends, so all four
    /// common quoting styles are recognized regardless of dialect.
    pub fn standard(fold: CaseFold) -> Self {
        Self::new(fold)
            .with_delimiter('"', '"')
            .with_delimiter('`', '`')
            .with_delimiter('[', ']')
            .with_delimiter('\'', '\'')
    }

    /// The configured case fold
    pub fn fold(&self) -> CaseFold {
        self.fold
    }

    /// Return the interior of `raw` if it is wrapped in one of the
    /// configured delimiter pairs
    fn strip<'a>(&self, raw: &'a str) -> Option<&'a str> {
        for (open, close) in &self.delimiters {
            if raw.len() >= open.len_utf8() + close.len_utf8()
                && raw.starts_with(*open)
                && raw.ends_with(*close)
            {
                return Some(&raw[open.len_utf8()..raw.len() - close.len_utf8()]);
            }
        }
        None
    }
}

impl Default for QuotingConfig {
    fn default() -> Self {
        Self::standard(CaseFold::Preserve)
    }
}

/// A normalized SQL identifier
///
/// Constructed through [`Identifier::normalize`]; the stored value is
/// already canonical, so equality and hashing are plain string
/// comparisons on it.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Identifier {
    value: String,
    quoted: bool,
}

impl Identifier {
    /// Normalize a raw lexeme into an identifier
    ///
    /// Quoted lexemes keep their interior verbatim; unquoted lexemes are
    /// folded per the configuration. Normalization is idempotent: a
    /// value that carries no delimiters and is already folded maps to
    /// itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use ontomap_ir::{CaseFold, Identifier, QuotingConfig};
    ///
    /// let config = QuotingConfig::standard(CaseFold::Upper);
    /// let quoted = Identifier::normalize("\"Foo\"", &config);
    /// let bare = Identifier::normalize("foo", &config);
    ///
    /// assert_eq!(quoted.as_str(), "Foo");
    /// assert_eq!(bare.as_str(), "FOO");
    /// assert_ne!(quoted, bare);
    /// ```
    pub fn normalize(raw: &str, config: &QuotingConfig) -> Self {
        if let Some(interior) = config.strip(raw) {
            return Self {
                value: interior.to_string(),
                quoted: true,
            };
        }

        let value = match config.fold() {
            CaseFold::Upper => raw.to_uppercase(),
            CaseFold::Lower => raw.to_lowercase(),
            CaseFold::Preserve => raw.to_string(),
        };

        Self {
            value,
            quoted: false,
        }
    }

    /// Normalize an optional lexeme
    ///
    /// Absent input maps to an absent identifier, never to an empty one.
    pub fn normalize_opt(raw: Option<&str>, config: &QuotingConfig) -> Option<Self> {
        raw.map(|r| Self::normalize(r, config))
    }

    /// The canonical value
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the original lexeme was quoted
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        // The quoted marker is display metadata; identity is the
        // canonical value.
        self.value == other.value
    }
}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Reference to a relation: optional schema plus mandatory name
///
/// Used as a catalog key and, inside a scope, as an alias key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationRef {
    /// Optional schema qualifier
    pub schema: Option<Identifier>,
    /// Relation name or alias
    pub name: Identifier,
}

impl RelationRef {
    /// Create an unqualified reference
    pub fn new(name: Identifier) -> Self {
        Self { schema: None, name }
    }

    /// Create a schema-qualified reference
    pub fn qualified(schema: Identifier, name: Identifier) -> Self {
        Self {
            schema: Some(schema),
            name,
        }
    }

    /// Normalize raw lexemes into a reference
    pub fn normalize(schema: Option<&str>, name: &str, config: &QuotingConfig) -> Self {
        Self {
            schema: Identifier::normalize_opt(schema, config),
            name: Identifier::normalize(name, config),
        }
    }
}

impl fmt::Display for RelationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Reference to an attribute, optionally qualified by its owning relation
///
/// `relation: None` means an unqualified reference (or a scope-level
/// alias entry). This is the key type for every attribute table in the
/// resolved model; within one table, keys are unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedAttributeRef {
    /// Owning relation alias, if qualified
    pub relation: Option<RelationRef>,
    /// Attribute name
    pub attribute: Identifier,
}

impl QualifiedAttributeRef {
    /// Create an unqualified reference
    pub fn new(attribute: Identifier) -> Self {
        Self {
            relation: None,
            attribute,
        }
    }

    /// Create a reference owned by a relation alias
    pub fn owned(relation: RelationRef, attribute: Identifier) -> Self {
        Self {
            relation: Some(relation),
            attribute,
        }
    }

    /// Normalize raw lexemes into a reference
    ///
    /// The owner, when present, is a single qualifier lexeme (an alias
    /// or relation name, never schema-qualified at this point).
    pub fn normalize(owner: Option<&str>, attribute: &str, config: &QuotingConfig) -> Self {
        Self {
            relation: owner.map(|o| RelationRef::normalize(None, o, config)),
            attribute: Identifier::normalize(attribute, config),
        }
    }
}

impl fmt::Display for QualifiedAttributeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.relation {
            Some(relation) => write!(f, "{}.{}", relation, self.attribute),
            None => write!(f, "{}", self.attribute),
        }
    }
}
