// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Scope tree assembly
//!
//! This module is the entry point of the crate: it turns one parsed
//! `SELECT` statement plus a catalog snapshot into a resolved [`Scope`]
//! tree.
//!
//! ## Order of work
//!
//! Statement-level constructs outside the supported subset are rejected
//! before any resolution starts. Then, for each `SELECT` level:
//!
//! 1. `FROM` items and their joins, strictly in source order;
//! 2. the `WHERE` clause (before projection, so select-list aliases are
//!    not visible to it);
//! 3. the projection list.
//!
//! Sub-selects found in `FROM` recurse into this module with their
//! alias; the child scope is wired into the parent by the from-item
//! resolver. Resolution is synchronous and bounded by the AST: nesting
//! strictly decreases the remaining tree, so it always terminates.

use tracing::debug;

use crate::condition::{normalize_condition, ConditionContext};
use crate::error::{ResolutionError, ResolutionResult};
use crate::from_item::resolve_from_item;
use crate::join::resolve_join;
use crate::projection::resolve_projection;
use crate::scope::Scope;
use ontomap_catalog::CatalogSnapshot;
use ontomap_ir::{Identifier, Query, SelectItem, SelectStatement, SetOp};

/// Resolve a query into its root scope
///
/// # Errors
///
/// Any [`ResolutionError`]; the scope is never partially returned. An
/// [`ResolutionError::UnsupportedConstruct`] means the statement shape
/// is outside the supported subset (the caller may fall back to an
/// opaque view); the other kinds mean the statement is semantically
/// broken against this catalog.
pub fn resolve(query: &Query, snapshot: &CatalogSnapshot) -> ResolutionResult<Scope> {
    resolve_query(query, snapshot, None)
}

/// Resolve a query, root-level or as a sub-select known by `alias`
pub(crate) fn resolve_query(
    query: &Query,
    snapshot: &CatalogSnapshot,
    alias: Option<Identifier>,
) -> ResolutionResult<Scope> {
    if !query.ctes.is_empty() {
        return Err(ResolutionError::unsupported("WITH clause"));
    }
    if !query.order_by.is_empty() {
        return Err(ResolutionError::unsupported("ORDER BY clause"));
    }
    if query.limit.is_some() || query.offset.is_some() {
        return Err(ResolutionError::unsupported("LIMIT/OFFSET clause"));
    }

    match &query.body {
        SetOp::Select(select) => resolve_select(select, snapshot, alias),
        SetOp::Union { .. } => Err(ResolutionError::unsupported("UNION")),
        SetOp::Intersect { .. } => Err(ResolutionError::unsupported("INTERSECT")),
        SetOp::Except { .. } => Err(ResolutionError::unsupported("EXCEPT/MINUS")),
    }
}

fn resolve_select(
    select: &SelectStatement,
    snapshot: &CatalogSnapshot,
    alias: Option<Identifier>,
) -> ResolutionResult<Scope> {
    reject_unsupported_clauses(select)?;

    let mut scope = Scope::new(alias);

    for item in &select.from {
        resolve_from_item(&mut scope, &item.factor, snapshot)?;
        for join in &item.joins {
            resolve_join(&mut scope, join, snapshot)?;
        }
    }

    if let Some(where_clause) = &select.where_clause {
        let filter =
            normalize_condition(&scope, where_clause, snapshot.quoting(), ConditionContext::Filter)?;
        scope.filter = Some(filter);
    }

    resolve_projection(&mut scope, &select.projection, snapshot.quoting())?;

    debug!(
        relations = scope.relations.len(),
        children = scope.child_scopes.len(),
        joins = scope.join_descriptors.len(),
        projected = scope.projected_attributes.len(),
        "scope resolved"
    );

    Ok(scope)
}

fn reject_unsupported_clauses(select: &SelectStatement) -> ResolutionResult<()> {
    if !select.group_by.is_empty() {
        return Err(ResolutionError::unsupported("GROUP BY clause"));
    }
    if select.having.is_some() {
        return Err(ResolutionError::unsupported("HAVING clause"));
    }
    if select.into.is_some() {
        return Err(ResolutionError::unsupported("SELECT INTO"));
    }
    if select.connect_by.is_some() {
        return Err(ResolutionError::unsupported("CONNECT BY clause"));
    }
    if select.distinct
        && select.projection.iter().any(|item| {
            matches!(
                item,
                SelectItem::Wildcard | SelectItem::QualifiedWildcard(_)
            )
        })
    {
        return Err(ResolutionError::unsupported(
            "DISTINCT over a wildcard projection",
        ));
    }
    Ok(())
}
