// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! End-to-end resolution tests over the reference schema

use ontomap_ir::{
    CommonTableExpr, Dialect, Query, SelectItem, SelectStatement, SetOp, TableWithJoins,
};
use ontomap_resolver::{resolve, ResolutionError};
use ontomap_test_utils::fixtures::{
    aliased, col, derived, eq, item, lit_int, natural_join, qcol, select, table, table_as,
};
use ontomap_test_utils::spec_snapshot;

#[test]
fn test_single_relation_wildcard() {
    let snapshot = spec_snapshot(Dialect::H2);

    // SELECT * FROM PERSON p
    let query = select(vec![SelectItem::Wildcard], vec![table_as("PERSON", "p")]);
    let scope = resolve(&query, &snapshot).unwrap();

    assert_eq!(scope.relations.len(), 1);
    assert_eq!(scope.table_attributes.len(), 3);
    assert!(scope.join_descriptors.is_empty());
    assert!(scope.child_scopes.is_empty());
    assert!(scope.alias.is_none());
}

#[test]
fn test_comma_list_registers_both_relations() {
    let snapshot = spec_snapshot(Dialect::H2);

    // SELECT * FROM PERSON, EMAIL
    let query = select(vec![SelectItem::Wildcard], vec![table("PERSON"), table("EMAIL")]);
    let scope = resolve(&query, &snapshot).unwrap();

    assert_eq!(scope.relations.len(), 2);
    assert_eq!(scope.table_attributes.len(), 7);
}

#[test]
fn test_unknown_relation() {
    let snapshot = spec_snapshot(Dialect::H2);

    let query = select(vec![SelectItem::Wildcard], vec![table("NOPE")]);
    let err = resolve(&query, &snapshot).unwrap_err();

    assert!(matches!(err, ResolutionError::UnknownRelation { .. }));
    assert!(!err.is_structural());
}

#[test]
fn test_aliased_projection_keys() {
    let snapshot = spec_snapshot(Dialect::H2);

    // SELECT name a, age b FROM PERSON c
    let query = select(
        vec![aliased(col("name"), "a"), aliased(col("age"), "b")],
        vec![table_as("PERSON", "c")],
    );
    let scope = resolve(&query, &snapshot).unwrap();

    assert_eq!(scope.projected_attributes.len(), 2);
    let keys: Vec<String> = scope
        .projected_attributes
        .keys()
        .map(ToString::to_string)
        .collect();
    assert_eq!(keys, vec!["A", "B"]);

    // Both keys are unqualified
    assert!(scope
        .projected_attributes
        .keys()
        .all(|key| key.relation.is_none()));
}

#[test]
fn test_subselect_without_alias_is_missing_alias() {
    let snapshot = spec_snapshot(Dialect::H2);

    // SELECT * FROM PERSON, (SELECT * FROM EMAIL)
    let inner = select(vec![SelectItem::Wildcard], vec![table("EMAIL")]);
    let query = select(
        vec![SelectItem::Wildcard],
        vec![table("PERSON"), derived(inner, None)],
    );

    let err = resolve(&query, &snapshot).unwrap_err();
    assert!(matches!(err, ResolutionError::MissingAlias { .. }));
    assert!(!err.is_structural());
}

#[test]
fn test_with_clause_is_unsupported_regardless_of_catalog() {
    let snapshot = spec_snapshot(Dialect::H2);

    let cte = CommonTableExpr {
        name: "x".to_string(),
        columns: vec![],
        query: Box::new(select(vec![SelectItem::Wildcard], vec![table("PERSON")])),
    };
    let query =
        select(vec![SelectItem::Wildcard], vec![table("x")]).with_ctes(vec![cte]);

    let err = resolve(&query, &snapshot).unwrap_err();
    assert!(matches!(err, ResolutionError::UnsupportedConstruct { .. }));
    assert!(err.is_structural());
}

#[test]
fn test_set_operations_rejected() {
    let snapshot = spec_snapshot(Dialect::H2);

    let left = select(vec![SelectItem::Wildcard], vec![table("PERSON")]);
    let right = select(vec![SelectItem::Wildcard], vec![table("EMAIL")]);

    let union = Query {
        body: SetOp::Union {
            left: Box::new(left),
            right: Box::new(right),
            all: true,
        },
        ..Query::default()
    };

    let err = resolve(&union, &snapshot).unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_statement_level_clauses_rejected() {
    let snapshot = spec_snapshot(Dialect::H2);
    let base = || select(vec![SelectItem::Wildcard], vec![table("PERSON")]);

    let with_limit = base().with_limit(lit_int(10));
    assert!(resolve(&with_limit, &snapshot).unwrap_err().is_structural());

    let with_order = base().with_order_by(vec![ontomap_ir::OrderByItem {
        expr: col("name"),
        descending: false,
    }]);
    assert!(resolve(&with_order, &snapshot).unwrap_err().is_structural());
}

#[test]
fn test_select_level_clauses_rejected() {
    let snapshot = spec_snapshot(Dialect::H2);

    let group_by = Query::select(
        SelectStatement::default()
            .with_projection(vec![item(col("name"))])
            .with_from(vec![table("PERSON")])
            .with_where(eq(col("age"), lit_int(30))),
    );
    // sanity: the base shape resolves
    assert!(resolve(&group_by, &snapshot).is_ok());

    let mut statement = SelectStatement::default()
        .with_projection(vec![item(col("name"))])
        .with_from(vec![table("PERSON")]);
    statement.group_by = vec![col("name")];
    assert!(
        resolve(&Query::select(statement), &snapshot)
            .unwrap_err()
            .is_structural()
    );

    let mut statement = SelectStatement::default()
        .with_projection(vec![item(col("name"))])
        .with_from(vec![table("PERSON")]);
    statement.having = Some(eq(col("age"), lit_int(1)));
    assert!(
        resolve(&Query::select(statement), &snapshot)
            .unwrap_err()
            .is_structural()
    );

    let mut statement = SelectStatement::default()
        .with_projection(vec![item(col("name"))])
        .with_from(vec![table("PERSON")]);
    statement.into = Some("target".to_string());
    assert!(
        resolve(&Query::select(statement), &snapshot)
            .unwrap_err()
            .is_structural()
    );

    let mut statement = SelectStatement::default()
        .with_projection(vec![item(col("name"))])
        .with_from(vec![table("PERSON")]);
    statement.connect_by = Some(eq(col("age"), lit_int(1)));
    assert!(
        resolve(&Query::select(statement), &snapshot)
            .unwrap_err()
            .is_structural()
    );
}

#[test]
fn test_distinct_over_wildcard_rejected_but_explicit_list_allowed() {
    let snapshot = spec_snapshot(Dialect::H2);

    let explicit = Query::select(
        SelectStatement::default()
            .with_projection(vec![item(col("name"))])
            .with_from(vec![table("PERSON")])
            .with_distinct(),
    );
    assert!(resolve(&explicit, &snapshot).is_ok());

    let wildcard = Query::select(
        SelectStatement::default()
            .with_projection(vec![SelectItem::Wildcard])
            .with_from(vec![table("PERSON")])
            .with_distinct(),
    );
    assert!(resolve(&wildcard, &snapshot).unwrap_err().is_structural());
}

#[test]
fn test_where_clause_is_normalized_onto_the_scope() {
    let snapshot = spec_snapshot(Dialect::H2);

    let query = Query::select(
        SelectStatement::default()
            .with_projection(vec![item(col("name"))])
            .with_from(vec![table_as("PERSON", "p")])
            .with_where(eq(qcol("p", "age"), lit_int(30))),
    );
    let scope = resolve(&query, &snapshot).unwrap();

    let filter = scope.filter.expect("WHERE clause recorded");
    let attrs = filter.attributes();
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].to_string(), "P.AGE");
}

#[test]
fn test_where_does_not_see_projection_aliases() {
    let snapshot = spec_snapshot(Dialect::H2);

    // SELECT age AS a FROM PERSON WHERE a = 30
    let query = Query::select(
        SelectStatement::default()
            .with_projection(vec![aliased(col("age"), "a")])
            .with_from(vec![table("PERSON")])
            .with_where(eq(col("a"), lit_int(30))),
    );

    let err = resolve(&query, &snapshot).unwrap_err();
    assert!(matches!(err, ResolutionError::UnknownAttribute { .. }));
}

#[test]
fn test_nested_subselect_scope_tree() {
    let snapshot = spec_snapshot(Dialect::H2);
    let quoting = snapshot.quoting().clone();

    // SELECT * FROM (SELECT email AS addr FROM (SELECT * FROM EMAIL) inner_e) outer_e
    let innermost = select(vec![SelectItem::Wildcard], vec![table("EMAIL")]);
    let middle = select(
        vec![aliased(col("email"), "addr")],
        vec![derived(innermost, Some("inner_e"))],
    );
    let query = select(
        vec![SelectItem::Wildcard],
        vec![derived(middle, Some("outer_e"))],
    );

    let scope = resolve(&query, &snapshot).unwrap();

    assert_eq!(scope.child_scopes.len(), 1);
    let outer_alias = ontomap_ir::Identifier::normalize("outer_e", &quoting);
    let child = scope.child_scopes.get(&outer_alias).unwrap();
    assert_eq!(child.alias.as_ref(), Some(&outer_alias));
    assert_eq!(child.child_scopes.len(), 1);

    // The outer scope sees exactly what the middle projected
    assert_eq!(scope.table_attributes.len(), 1);
    let exposed = ontomap_ir::QualifiedAttributeRef::normalize(
        Some("outer_e"),
        "addr",
        &quoting,
    );
    assert!(scope.table_attributes.contains_key(&exposed));
}

#[test]
fn test_natural_join_inside_subselect_then_reprojected() {
    let snapshot = spec_snapshot(Dialect::H2);

    let inner = select(
        vec![item(qcol("PERSON", "name"))],
        vec![TableWithJoins::new(ontomap_ir::TableFactor::relation("PERSON")).with_joins(vec![
            natural_join(ontomap_ir::TableFactor::relation("EMAIL")),
        ])],
    );
    let query = select(vec![SelectItem::Wildcard], vec![derived(inner, Some("c"))]);

    let scope = resolve(&query, &snapshot).unwrap();
    assert_eq!(scope.projected_attributes.len(), 1);

    let quoting = snapshot.quoting().clone();
    let child = scope
        .child_scopes
        .get(&ontomap_ir::Identifier::normalize("c", &quoting))
        .unwrap();
    assert_eq!(child.join_descriptors.len(), 1);
}

#[test]
fn test_quoted_identifiers_in_query() {
    // Oracle folds unquoted to upper; a quoted lower-case name only
    // matches a quoted catalog entry
    let relations = vec![
        ontomap_ir::RelationMetadata::new("\"people\"").with_attributes(vec![
            ontomap_ir::AttributeMetadata::new("\"id\"", ontomap_ir::DataType::Integer),
        ]),
    ];
    let snapshot =
        ontomap_catalog::CatalogSnapshot::from_metadata(relations, Dialect::Oracle).unwrap();

    let unquoted = select(vec![SelectItem::Wildcard], vec![table("people")]);
    assert!(matches!(
        resolve(&unquoted, &snapshot),
        Err(ResolutionError::UnknownRelation { .. })
    ));

    let quoted = select(vec![SelectItem::Wildcard], vec![table("\"people\"")]);
    let scope = resolve(&quoted, &snapshot).unwrap();
    assert_eq!(scope.table_attributes.len(), 1);
}

#[test]
fn test_schema_qualified_relation() {
    let snapshot = spec_snapshot(Dialect::H2);

    let factor = ontomap_ir::TableFactor::Relation {
        schema: Some("hr".to_string()),
        name: "DEPARTMENT".to_string(),
        alias: Some("d".to_string()),
    };
    let query = select(
        vec![item(qcol("d", "label"))],
        vec![TableWithJoins::new(factor)],
    );

    let scope = resolve(&query, &snapshot).unwrap();
    assert_eq!(scope.projected_attributes.len(), 1);
}
