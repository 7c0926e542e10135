// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Projection resolution
//!
//! This module resolves the `SELECT` list into the scope's
//! projected-attribute table.
//!
//! ## Rules
//!
//! - `*` copies the whole of `table_attributes`, preserving FROM order.
//! - `table.*` copies the attributes owned by that one alias.
//! - A bare column projects under its own unqualified name.
//! - An aliased item projects under the alias; any expression is
//!   allowed once it is named, a non-column expression without an alias
//!   is not.
//!
//! Select-list aliases become visible to the parent scope (through
//! `projected_attributes`) and are recorded in the scope's own
//! `attributes` — but only after the whole list has been processed, so
//! sibling items and the already-normalized `WHERE` clause never see
//! them.

use indexmap::IndexMap;
use tracing::debug;

use crate::attribute::{owner_candidates, resolve_attribute};
use crate::condition::normalize_value;
use crate::error::{ResolutionError, ResolutionResult};
use crate::resolved::ResolvedExpr;
use crate::scope::Scope;
use ontomap_ir::{
    Expr, Identifier, QualifiedAttributeRef, QuotingConfig, RelationRef, SelectItem,
};

/// Resolve the SELECT list into `projected_attributes`
pub(crate) fn resolve_projection(
    scope: &mut Scope,
    items: &[SelectItem],
    quoting: &QuotingConfig,
) -> ResolutionResult<()> {
    let mut projected: IndexMap<QualifiedAttributeRef, QualifiedAttributeRef> = IndexMap::new();
    let mut expressions: IndexMap<Identifier, ResolvedExpr> = IndexMap::new();
    let mut alias_entries: Vec<(QualifiedAttributeRef, QualifiedAttributeRef)> = Vec::new();

    for item in items {
        match item {
            SelectItem::Wildcard => {
                for (key, value) in &scope.table_attributes {
                    insert_projected(&mut projected, key.clone(), value.clone())?;
                }
            }
            SelectItem::QualifiedWildcard(table) => {
                let owner = resolve_wildcard_owner(scope, table, quoting)?;
                for (key, value) in scope.attributes_of(&owner) {
                    insert_projected(&mut projected, key.clone(), value.clone())?;
                }
            }
            SelectItem::UnnamedExpr(Expr::Column(column)) => {
                let reference = QualifiedAttributeRef::normalize(
                    column.table.as_deref(),
                    &column.column,
                    quoting,
                );
                let canonical = resolve_attribute(scope, &reference)?;
                let key = QualifiedAttributeRef::new(reference.attribute);
                insert_projected(&mut projected, key, canonical)?;
            }
            SelectItem::UnnamedExpr(_) => {
                return Err(ResolutionError::MissingAlias {
                    context: "non-column expression in select list".to_string(),
                });
            }
            SelectItem::AliasedExpr {
                expr: Expr::Column(column),
                alias,
            } => {
                let reference = QualifiedAttributeRef::normalize(
                    column.table.as_deref(),
                    &column.column,
                    quoting,
                );
                let canonical = resolve_attribute(scope, &reference)?;
                let key = QualifiedAttributeRef::new(Identifier::normalize(alias, quoting));
                insert_projected(&mut projected, key.clone(), canonical.clone())?;
                alias_entries.push((key, canonical));
            }
            SelectItem::AliasedExpr { expr, alias } => {
                let resolved = normalize_value(scope, expr, quoting)?;
                let alias_ident = Identifier::normalize(alias, quoting);
                let key = QualifiedAttributeRef::new(alias_ident.clone());
                insert_projected(&mut projected, key.clone(), key.clone())?;
                expressions.insert(alias_ident, resolved);
                alias_entries.push((key.clone(), key));
            }
        }
    }

    debug!(
        projected = projected.len(),
        aliases = alias_entries.len(),
        "projection resolved"
    );

    scope.projected_attributes = projected;
    scope.projected_expressions = expressions;

    // Alias entries land in `attributes` only now; items within the
    // same list never saw each other.
    for (key, value) in alias_entries {
        scope.attributes.insert(key, value);
    }

    Ok(())
}

fn resolve_wildcard_owner(
    scope: &Scope,
    table: &str,
    quoting: &QuotingConfig,
) -> ResolutionResult<RelationRef> {
    let owner = RelationRef::normalize(None, table, quoting);
    let candidates = owner_candidates(scope, &owner);

    match candidates.as_slice() {
        [] => Err(ResolutionError::UnknownRelation {
            reference: owner.to_string(),
        }),
        [only] => Ok(only.clone()),
        _ => Err(ResolutionError::AmbiguousAttribute {
            reference: owner.to_string(),
            candidates: candidates.iter().map(ToString::to_string).collect(),
        }),
    }
}

fn insert_projected(
    projected: &mut IndexMap<QualifiedAttributeRef, QualifiedAttributeRef>,
    key: QualifiedAttributeRef,
    value: QualifiedAttributeRef,
) -> ResolutionResult<()> {
    if let Some(existing) = projected.get(&key) {
        return Err(ResolutionError::AmbiguousAttribute {
            reference: key.to_string(),
            candidates: vec![existing.to_string(), value.to_string()],
        });
    }
    projected.insert(key, value);
    Ok(())
}
