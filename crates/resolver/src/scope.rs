// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Scope model
//!
//! This module defines the resolved scope type — the unit of output of
//! the whole crate.
//!
//! ## Design
//!
//! Scopes form a tree rooted at the outermost `SELECT`; each sub-select
//! in `FROM` contributes one child. A scope owns its attribute tables
//! outright: when a child's projected attributes become visible to the
//! parent, they are copied in under the child's alias, never shared by
//! reference. Once the resolution call that built a scope returns, the
//! scope is immutable and safe to read from any number of consumers.
//!
//! ## Attribute tables
//!
//! - `table_attributes`: every column contributed by the scope's own
//!   `FROM`/`JOIN` items (base relations in full, sub-selects through
//!   what they project), in `FROM` order. This is what `SELECT *`
//!   expands to.
//! - `attributes`: the lookup table for references appearing in this
//!   scope's own expressions — `table_attributes` plus the alias-level
//!   entries the projection step registers.
//! - `projected_attributes`: what the scope exposes to its parent, keyed
//!   as the parent sees it.
//!
//! Keys are unique within each table; values are canonical references
//! chaining down to a base relation alias.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::resolved::ResolvedExpr;
use ontomap_catalog::RelationDefinition;
use ontomap_ir::{Identifier, QualifiedAttributeRef, RelationRef};

/// Outcome of one resolved join, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum JoinDescriptor {
    /// `ON` condition with every column leaf resolved
    On(ResolvedExpr),

    /// `NATURAL JOIN`: the same-named attribute pairs it implies
    Natural {
        common: IndexSet<QualifiedAttributeRef>,
    },

    /// `JOIN ... USING (...)`: both sides of every named column
    Using {
        common: IndexSet<QualifiedAttributeRef>,
    },
}

/// The resolved semantic unit for one `SELECT`/sub-select level
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Scope {
    /// The identifier this scope is known by in its parent (None for
    /// the root scope)
    pub alias: Option<Identifier>,

    /// Base relations introduced directly in this scope's FROM/JOIN,
    /// keyed by alias
    pub relations: IndexMap<RelationRef, RelationDefinition>,

    /// Columns contributed by the FROM/JOIN items, in FROM order
    pub table_attributes: IndexMap<QualifiedAttributeRef, QualifiedAttributeRef>,

    /// Lookup table for this scope's own expressions: `table_attributes`
    /// plus alias-level entries from the projection step
    pub attributes: IndexMap<QualifiedAttributeRef, QualifiedAttributeRef>,

    /// What this scope exposes outward, keyed as seen from the parent
    pub projected_attributes: IndexMap<QualifiedAttributeRef, QualifiedAttributeRef>,

    /// Normalized expression bodies of aliased non-trivial projections
    pub projected_expressions: IndexMap<Identifier, ResolvedExpr>,

    /// Join outcomes, in declaration order
    pub join_descriptors: Vec<JoinDescriptor>,

    /// Normalized WHERE clause, if present
    pub filter: Option<ResolvedExpr>,

    /// Child scopes for sub-selects in FROM, keyed by their alias
    pub child_scopes: IndexMap<Identifier, Scope>,
}

impl Scope {
    /// Create an empty scope
    pub fn new(alias: Option<Identifier>) -> Self {
        Self {
            alias,
            ..Self::default()
        }
    }

    /// Whether an alias with this name is already taken by a relation
    /// or a child scope
    pub fn has_alias(&self, name: &Identifier) -> bool {
        self.relations.keys().any(|r| &r.name == name)
            || self.child_scopes.contains_key(name)
    }

    /// Register one column under `table_attributes` and `attributes`
    ///
    /// Keys are unique by construction: the from-item resolver rejects
    /// duplicate aliases and duplicate exposed names before calling
    /// this, so a collision here is an internal consistency bug.
    pub(crate) fn insert_table_attribute(
        &mut self,
        key: QualifiedAttributeRef,
        value: QualifiedAttributeRef,
    ) {
        let previous = self.table_attributes.insert(key.clone(), value.clone());
        debug_assert!(previous.is_none(), "duplicate table attribute key {key}");
        let previous = self.attributes.insert(key, value);
        debug_assert!(previous.is_none(), "duplicate attribute key");
    }

    /// The `table_attributes` entries owned by one alias, in order
    pub fn attributes_of<'a>(
        &'a self,
        owner: &'a RelationRef,
    ) -> impl Iterator<Item = (&'a QualifiedAttributeRef, &'a QualifiedAttributeRef)> {
        self.table_attributes
            .iter()
            .filter(move |(key, _)| key.relation.as_ref() == Some(owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontomap_ir::{CaseFold, QuotingConfig};

    fn config() -> QuotingConfig {
        QuotingConfig::standard(CaseFold::Upper)
    }

    #[test]
    fn test_new_scope_is_empty() {
        let scope = Scope::new(None);
        assert!(scope.alias.is_none());
        assert!(scope.relations.is_empty());
        assert!(scope.table_attributes.is_empty());
        assert!(scope.join_descriptors.is_empty());
    }

    #[test]
    fn test_insert_and_filter_by_owner() {
        let mut scope = Scope::new(None);
        let config = config();

        let p = RelationRef::normalize(None, "p", &config);
        let e = RelationRef::normalize(None, "e", &config);

        for (owner, name) in [(&p, "idPerson"), (&p, "name"), (&e, "idPerson")] {
            let key = QualifiedAttributeRef::owned(
                owner.clone(),
                Identifier::normalize(name, &config),
            );
            scope.insert_table_attribute(key.clone(), key);
        }

        assert_eq!(scope.table_attributes.len(), 3);
        assert_eq!(scope.attributes_of(&p).count(), 2);
        assert_eq!(scope.attributes_of(&e).count(), 1);
    }

    #[test]
    fn test_has_alias_covers_children() {
        let mut scope = Scope::new(None);
        let config = config();

        let alias = Identifier::normalize("c", &config);
        scope
            .child_scopes
            .insert(alias.clone(), Scope::new(Some(alias.clone())));

        assert!(scope.has_alias(&alias));
        assert!(!scope.has_alias(&Identifier::normalize("d", &config)));
    }
}
