// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Join resolution
//!
//! This module computes one [`JoinDescriptor`] per join, in declaration
//! order.
//!
//! `NATURAL JOIN` and `USING` are resolved against the attributes that
//! were in scope before the joined item was registered, pairwise over
//! every earlier relation — a third `NATURAL JOIN` can match attributes
//! from any earlier member of the `FROM` list, not only the immediately
//! preceding one. `ON` conditions are normalized through the condition
//! grammar. Outer joins are outside this resolver's scope; a cross join
//! is plain relation introduction.

use indexmap::IndexSet;
use tracing::debug;

use crate::condition::{normalize_condition, ConditionContext};
use crate::error::{ResolutionError, ResolutionResult};
use crate::from_item::resolve_from_item;
use crate::scope::{JoinDescriptor, Scope};
use ontomap_catalog::CatalogSnapshot;
use ontomap_ir::{Identifier, Join, JoinCondition, JoinType, QualifiedAttributeRef, RelationRef};

/// Resolve one join: register its right-hand item, then compute its
/// descriptor
pub(crate) fn resolve_join(
    scope: &mut Scope,
    join: &Join,
    snapshot: &CatalogSnapshot,
) -> ResolutionResult<()> {
    match join.join_type {
        JoinType::Left | JoinType::Right | JoinType::Full => {
            return Err(ResolutionError::unsupported("outer join"));
        }
        JoinType::Cross if !matches!(join.condition, JoinCondition::None) => {
            return Err(ResolutionError::unsupported("cross join with a condition"));
        }
        JoinType::Inner | JoinType::Cross => {}
    }

    // Attributes visible before this join item is added; natural/using
    // resolution works against these.
    let pre_join: Vec<QualifiedAttributeRef> = scope.table_attributes.keys().cloned().collect();

    let joined = resolve_from_item(scope, &join.factor, snapshot)?;

    match &join.condition {
        JoinCondition::None => Ok(()),
        JoinCondition::On(expr) => {
            let resolved =
                normalize_condition(scope, expr, snapshot.quoting(), ConditionContext::Join)?;
            debug!(joined = %joined, "ON condition resolved");
            scope.join_descriptors.push(JoinDescriptor::On(resolved));
            Ok(())
        }
        JoinCondition::Natural => {
            let common = natural_common(scope, &pre_join, &joined);
            debug!(joined = %joined, common = common.len(), "natural join resolved");
            scope
                .join_descriptors
                .push(JoinDescriptor::Natural { common });
            Ok(())
        }
        JoinCondition::Using(columns) => {
            let common = using_common(scope, &pre_join, &joined, columns, snapshot)?;
            debug!(joined = %joined, common = common.len(), "using join resolved");
            scope
                .join_descriptors
                .push(JoinDescriptor::Using { common });
            Ok(())
        }
    }
}

/// Same-named attribute pairs between the newly joined relation and
/// every relation already present
fn natural_common(
    scope: &Scope,
    pre_join: &[QualifiedAttributeRef],
    joined: &RelationRef,
) -> IndexSet<QualifiedAttributeRef> {
    let mut common = IndexSet::new();

    for existing in pre_join {
        if existing.relation.as_ref() == Some(joined) {
            continue;
        }
        let candidate = QualifiedAttributeRef::owned(joined.clone(), existing.attribute.clone());
        if scope.table_attributes.contains_key(&candidate) {
            common.insert(existing.clone());
            common.insert(candidate);
        }
    }

    common
}

/// Both qualified sides of every USING column
///
/// Each column must be unambiguous among the pre-join attributes and
/// must exist on the newly joined relation.
fn using_common(
    scope: &Scope,
    pre_join: &[QualifiedAttributeRef],
    joined: &RelationRef,
    columns: &[String],
    snapshot: &CatalogSnapshot,
) -> ResolutionResult<IndexSet<QualifiedAttributeRef>> {
    let quoting = snapshot.quoting();
    let mut common = IndexSet::new();

    for raw in columns {
        let name = Identifier::normalize(raw, quoting);

        let matches: Vec<&QualifiedAttributeRef> = pre_join
            .iter()
            .filter(|key| key.attribute == name)
            .collect();

        let left = match matches.as_slice() {
            [] => {
                return Err(ResolutionError::UnknownAttribute {
                    reference: name.to_string(),
                });
            }
            [only] => (*only).clone(),
            _ => {
                return Err(ResolutionError::AmbiguousAttribute {
                    reference: name.to_string(),
                    candidates: matches.iter().map(ToString::to_string).collect(),
                });
            }
        };

        let right = QualifiedAttributeRef::owned(joined.clone(), name);
        if !scope.table_attributes.contains_key(&right) {
            return Err(ResolutionError::UnknownAttribute {
                reference: right.to_string(),
            });
        }

        common.insert(left);
        common.insert(right);
    }

    Ok(common)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontomap_ir::{
        AttributeMetadata, BinaryOp, ColumnRef, DataType, Dialect, Expr, RelationMetadata,
        TableFactor,
    };

    fn snapshot() -> CatalogSnapshot {
        let relations = vec![
            RelationMetadata::new("PERSON").with_attributes(vec![
                AttributeMetadata::new("idPerson", DataType::Integer).with_primary_key(),
                AttributeMetadata::new("name", DataType::Varchar(Some(100))),
                AttributeMetadata::new("age", DataType::Integer),
            ]),
            RelationMetadata::new("EMAIL").with_attributes(vec![
                AttributeMetadata::new("idPerson", DataType::Integer),
                AttributeMetadata::new("idEmail", DataType::Integer).with_primary_key(),
                AttributeMetadata::new("email", DataType::Varchar(Some(255))),
                AttributeMetadata::new("active", DataType::Boolean),
            ]),
        ];
        CatalogSnapshot::from_metadata(relations, Dialect::H2).unwrap()
    }

    fn scope_with_person(snapshot: &CatalogSnapshot) -> Scope {
        let mut scope = Scope::new(None);
        resolve_from_item(&mut scope, &TableFactor::relation("person"), snapshot).unwrap();
        scope
    }

    fn join(join_type: JoinType, factor: TableFactor, condition: JoinCondition) -> Join {
        Join {
            join_type,
            factor,
            condition,
        }
    }

    #[test]
    fn test_natural_join_common_attributes() {
        let snapshot = snapshot();
        let mut scope = scope_with_person(&snapshot);

        resolve_join(
            &mut scope,
            &join(
                JoinType::Inner,
                TableFactor::relation("email"),
                JoinCondition::Natural,
            ),
            &snapshot,
        )
        .unwrap();

        assert_eq!(scope.join_descriptors.len(), 1);
        match &scope.join_descriptors[0] {
            JoinDescriptor::Natural { common } => {
                let rendered: Vec<String> = common.iter().map(ToString::to_string).collect();
                assert_eq!(rendered, vec!["PERSON.IDPERSON", "EMAIL.IDPERSON"]);
            }
            other => panic!("expected natural join, got {other:?}"),
        }
    }

    #[test]
    fn test_natural_join_no_common_attributes() {
        let relations = vec![
            RelationMetadata::new("A")
                .with_attributes(vec![AttributeMetadata::new("x", DataType::Integer)]),
            RelationMetadata::new("B")
                .with_attributes(vec![AttributeMetadata::new("y", DataType::Integer)]),
        ];
        let snapshot = CatalogSnapshot::from_metadata(relations, Dialect::H2).unwrap();

        let mut scope = Scope::new(None);
        resolve_from_item(&mut scope, &TableFactor::relation("a"), &snapshot).unwrap();
        resolve_join(
            &mut scope,
            &join(
                JoinType::Inner,
                TableFactor::relation("b"),
                JoinCondition::Natural,
            ),
            &snapshot,
        )
        .unwrap();

        match &scope.join_descriptors[0] {
            JoinDescriptor::Natural { common } => assert!(common.is_empty()),
            other => panic!("expected natural join, got {other:?}"),
        }
    }

    #[test]
    fn test_using_join() {
        let snapshot = snapshot();
        let mut scope = scope_with_person(&snapshot);

        resolve_join(
            &mut scope,
            &join(
                JoinType::Inner,
                TableFactor::relation("email"),
                JoinCondition::Using(vec!["idPerson".to_string()]),
            ),
            &snapshot,
        )
        .unwrap();

        match &scope.join_descriptors[0] {
            JoinDescriptor::Using { common } => assert_eq!(common.len(), 2),
            other => panic!("expected using join, got {other:?}"),
        }
    }

    #[test]
    fn test_using_unknown_column() {
        let snapshot = snapshot();
        let mut scope = scope_with_person(&snapshot);

        let result = resolve_join(
            &mut scope,
            &join(
                JoinType::Inner,
                TableFactor::relation("email"),
                JoinCondition::Using(vec!["personId".to_string()]),
            ),
            &snapshot,
        );

        assert!(matches!(
            result,
            Err(ResolutionError::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn test_using_column_missing_on_right() {
        let snapshot = snapshot();
        let mut scope = scope_with_person(&snapshot);

        let result = resolve_join(
            &mut scope,
            &join(
                JoinType::Inner,
                TableFactor::relation("email"),
                JoinCondition::Using(vec!["age".to_string()]),
            ),
            &snapshot,
        );

        assert!(matches!(
            result,
            Err(ResolutionError::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn test_on_condition() {
        let snapshot = snapshot();
        let mut scope = scope_with_person(&snapshot);

        let condition = Expr::BinaryOp {
            left: Box::new(Expr::Column(ColumnRef::new("idPerson").with_table("person"))),
            op: BinaryOp::Eq,
            right: Box::new(Expr::Column(ColumnRef::new("idPerson").with_table("email"))),
        };

        resolve_join(
            &mut scope,
            &join(
                JoinType::Inner,
                TableFactor::relation("email"),
                JoinCondition::On(condition),
            ),
            &snapshot,
        )
        .unwrap();

        match &scope.join_descriptors[0] {
            JoinDescriptor::On(resolved) => {
                assert_eq!(resolved.attributes().len(), 2);
            }
            other => panic!("expected ON descriptor, got {other:?}"),
        }
    }

    #[test]
    fn test_outer_joins_rejected() {
        let snapshot = snapshot();

        for join_type in [JoinType::Left, JoinType::Right, JoinType::Full] {
            let mut scope = scope_with_person(&snapshot);
            let result = resolve_join(
                &mut scope,
                &join(
                    join_type,
                    TableFactor::relation("email"),
                    JoinCondition::Natural,
                ),
                &snapshot,
            );
            assert!(matches!(
                result,
                Err(ResolutionError::UnsupportedConstruct { .. })
            ));
        }
    }

    #[test]
    fn test_cross_join_is_plain_introduction() {
        let snapshot = snapshot();
        let mut scope = scope_with_person(&snapshot);

        resolve_join(
            &mut scope,
            &join(
                JoinType::Cross,
                TableFactor::relation("email"),
                JoinCondition::None,
            ),
            &snapshot,
        )
        .unwrap();

        assert!(scope.join_descriptors.is_empty());
        assert_eq!(scope.relations.len(), 2);
        assert_eq!(scope.table_attributes.len(), 7);
    }
}
