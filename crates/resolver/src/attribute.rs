// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Attribute resolution
//!
//! This module implements the single gate through which every attribute
//! reference is resolved against a scope. No other module compares
//! identifier lexemes; anything that needs to know whether a reference
//! names a visible attribute goes through [`resolve_attribute`].
//!
//! Resolution either returns exactly one canonical reference or a typed
//! failure — an ambiguous match is never silently decided.

use crate::error::{ResolutionError, ResolutionResult};
use crate::scope::Scope;
use ontomap_ir::{Identifier, QualifiedAttributeRef, RelationRef};

/// Resolve a (possibly qualified) attribute reference in a scope
///
/// With an owner, the owner must name exactly one relation alias or
/// child-scope alias, and the attribute must exist under it. Without an
/// owner, the attribute name must match exactly one entry across all
/// visible attributes.
///
/// # Errors
///
/// - `UnknownRelation` if the owner names no visible alias
/// - `UnknownAttribute` if no attribute matches
/// - `AmbiguousAttribute` if more than one attribute matches
pub fn resolve_attribute(
    scope: &Scope,
    reference: &QualifiedAttributeRef,
) -> ResolutionResult<QualifiedAttributeRef> {
    match &reference.relation {
        Some(owner) => resolve_qualified(scope, owner, &reference.attribute),
        None => resolve_unqualified(scope, &reference.attribute),
    }
}

/// Aliases in the scope matching an owner reference
///
/// An exact alias match counts; a schema-less owner also matches a
/// schema-qualified alias by name. Child-scope aliases are bare
/// identifiers, so they only match schema-less owners.
pub(crate) fn owner_candidates(scope: &Scope, owner: &RelationRef) -> Vec<RelationRef> {
    let mut candidates: Vec<RelationRef> = scope
        .relations
        .keys()
        .filter(|alias| *alias == owner || (owner.schema.is_none() && alias.name == owner.name))
        .cloned()
        .collect();

    if owner.schema.is_none() {
        for alias in scope.child_scopes.keys() {
            if *alias == owner.name {
                candidates.push(RelationRef::new(alias.clone()));
            }
        }
    }

    candidates
}

fn resolve_qualified(
    scope: &Scope,
    owner: &RelationRef,
    attribute: &Identifier,
) -> ResolutionResult<QualifiedAttributeRef> {
    let candidates = owner_candidates(scope, owner);

    let alias = match candidates.as_slice() {
        [] => {
            return Err(ResolutionError::UnknownRelation {
                reference: owner.to_string(),
            });
        }
        [only] => only.clone(),
        _ => {
            return Err(ResolutionError::AmbiguousAttribute {
                reference: owner.to_string(),
                candidates: candidates.iter().map(ToString::to_string).collect(),
            });
        }
    };

    let key = QualifiedAttributeRef::owned(alias, attribute.clone());
    scope
        .attributes
        .get(&key)
        .cloned()
        .ok_or_else(|| ResolutionError::UnknownAttribute {
            reference: format!("{}.{}", owner, attribute),
        })
}

fn resolve_unqualified(
    scope: &Scope,
    attribute: &Identifier,
) -> ResolutionResult<QualifiedAttributeRef> {
    let matches: Vec<(&QualifiedAttributeRef, &QualifiedAttributeRef)> = scope
        .attributes
        .iter()
        .filter(|(key, _)| &key.attribute == attribute)
        .collect();

    match matches.as_slice() {
        [] => Err(ResolutionError::UnknownAttribute {
            reference: attribute.to_string(),
        }),
        [(_, value)] => Ok((*value).clone()),
        _ => Err(ResolutionError::AmbiguousAttribute {
            reference: attribute.to_string(),
            candidates: matches.iter().map(|(key, _)| key.to_string()).collect(),
        }),
    }
}
