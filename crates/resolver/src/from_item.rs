// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # From-item resolution
//!
//! This module resolves `FROM` items and join right-hand sides into the
//! current scope, strictly in source order — later items' join
//! resolution depends on every earlier relation already being
//! registered.
//!
//! Base relations are looked up in the catalog snapshot and registered
//! under their alias. Sub-selects recurse into a fresh child scope whose
//! projected attributes are copied (owned, not shared) into this scope
//! under the sub-select alias. Nested joins, lateral sub-selects, and
//! `VALUES` lists are rejected by name.

use tracing::debug;

use crate::assembler;
use crate::error::{ResolutionError, ResolutionResult};
use crate::scope::Scope;
use ontomap_catalog::{CatalogSnapshot, RelationDefinition};
use ontomap_ir::{Identifier, QualifiedAttributeRef, RelationRef, TableFactor};

/// Resolve one FROM item or join right-hand side into the scope
///
/// Returns the alias the item was registered under; the join resolver
/// uses it to tell the newly joined attributes from the pre-existing
/// ones.
pub(crate) fn resolve_from_item(
    scope: &mut Scope,
    factor: &TableFactor,
    snapshot: &CatalogSnapshot,
) -> ResolutionResult<RelationRef> {
    match factor {
        TableFactor::Relation {
            schema,
            name,
            alias,
        } => resolve_relation(scope, schema.as_deref(), name, alias.as_deref(), snapshot),
        TableFactor::Derived {
            lateral,
            subquery,
            alias,
        } => {
            if *lateral {
                return Err(ResolutionError::unsupported("LATERAL subquery in FROM"));
            }
            resolve_derived(scope, subquery, alias.as_deref(), snapshot)
        }
        TableFactor::NestedJoin(_) => Err(ResolutionError::unsupported(
            "parenthesized join as a FROM item",
        )),
        TableFactor::Values { .. } => Err(ResolutionError::unsupported("VALUES list in FROM")),
    }
}

fn resolve_relation(
    scope: &mut Scope,
    schema: Option<&str>,
    name: &str,
    alias: Option<&str>,
    snapshot: &CatalogSnapshot,
) -> ResolutionResult<RelationRef> {
    let quoting = snapshot.quoting();
    let reference = RelationRef::normalize(schema, name, quoting);

    let definition = snapshot
        .lookup(&reference)
        .ok_or_else(|| ResolutionError::UnknownRelation {
            reference: reference.to_string(),
        })?
        .clone();

    let alias = match alias {
        Some(raw) => RelationRef::new(Identifier::normalize(raw, quoting)),
        None => reference,
    };

    register_relation(scope, alias, definition)
}

fn register_relation(
    scope: &mut Scope,
    alias: RelationRef,
    definition: RelationDefinition,
) -> ResolutionResult<RelationRef> {
    check_alias_free(scope, &alias.name)?;

    for attribute in &definition.attributes {
        let key = QualifiedAttributeRef::owned(alias.clone(), attribute.name.clone());
        scope.insert_table_attribute(key.clone(), key);
    }

    debug!(alias = %alias, attributes = definition.attributes.len(), "relation registered");
    scope.relations.insert(alias.clone(), definition);
    Ok(alias)
}

fn resolve_derived(
    scope: &mut Scope,
    subquery: &ontomap_ir::Query,
    alias: Option<&str>,
    snapshot: &CatalogSnapshot,
) -> ResolutionResult<RelationRef> {
    let quoting = snapshot.quoting();

    let alias_ident = match alias {
        Some(raw) => Identifier::normalize(raw, quoting),
        None => {
            return Err(ResolutionError::MissingAlias {
                context: "subquery in FROM".to_string(),
            });
        }
    };

    check_alias_free(scope, &alias_ident)?;

    let child = assembler::resolve_query(subquery, snapshot, Some(alias_ident.clone()))?;
    let alias_ref = RelationRef::new(alias_ident.clone());

    // Re-expose what the child projects, re-qualified under its alias.
    // The key loses its child-internal owner here; two projected columns
    // collapsing onto one exposed name is a user error.
    for (key, value) in &child.projected_attributes {
        let exposed = QualifiedAttributeRef::owned(alias_ref.clone(), key.attribute.clone());
        if let Some(existing) = scope.table_attributes.get(&exposed) {
            return Err(ResolutionError::AmbiguousAttribute {
                reference: exposed.to_string(),
                candidates: vec![existing.to_string(), value.to_string()],
            });
        }
        scope.insert_table_attribute(exposed, value.clone());
    }

    debug!(alias = %alias_ident, projected = child.projected_attributes.len(), "sub-select registered");
    scope.child_scopes.insert(alias_ident, child);
    Ok(alias_ref)
}

fn check_alias_free(scope: &Scope, name: &Identifier) -> ResolutionResult<()> {
    if scope.has_alias(name) {
        return Err(ResolutionError::AmbiguousAttribute {
            reference: name.to_string(),
            candidates: vec![name.to_string(), name.to_string()],
        });
    }
    Ok(())
}
