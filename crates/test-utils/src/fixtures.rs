// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! AST construction helpers
//!
//! The resolver consumes trees built by an external parser; tests build
//! the same trees directly through these shorthands.

use ontomap_ir::{
    BinaryOp, ColumnRef, Expr, Join, JoinCondition, JoinType, Literal, Query, SelectItem,
    SelectStatement, TableFactor, TableWithJoins,
};

/// `SELECT <projection> FROM <from>`
pub fn select(projection: Vec<SelectItem>, from: Vec<TableWithJoins>) -> Query {
    Query::select(
        SelectStatement::default()
            .with_projection(projection)
            .with_from(from),
    )
}

/// A bare table FROM item
pub fn table(name: &str) -> TableWithJoins {
    TableWithJoins::new(TableFactor::relation(name))
}

/// An aliased table FROM item
pub fn table_as(name: &str, alias: &str) -> TableWithJoins {
    TableWithJoins::new(factor_as(name, alias))
}

/// An aliased table factor
pub fn factor_as(name: &str, alias: &str) -> TableFactor {
    TableFactor::Relation {
        schema: None,
        name: name.to_string(),
        alias: Some(alias.to_string()),
    }
}

/// A sub-select FROM item
pub fn derived(subquery: Query, alias: Option<&str>) -> TableWithJoins {
    TableWithJoins::new(TableFactor::Derived {
        lateral: false,
        subquery: Box::new(subquery),
        alias: alias.map(str::to_string),
    })
}

/// `INNER JOIN <factor> ON <condition>`
pub fn join_on(factor: TableFactor, condition: Expr) -> Join {
    Join {
        join_type: JoinType::Inner,
        factor,
        condition: JoinCondition::On(condition),
    }
}

/// `NATURAL JOIN <factor>`
pub fn natural_join(factor: TableFactor) -> Join {
    Join {
        join_type: JoinType::Inner,
        factor,
        condition: JoinCondition::Natural,
    }
}

/// `INNER JOIN <factor> USING (<columns>)`
pub fn using_join(factor: TableFactor, columns: &[&str]) -> Join {
    Join {
        join_type: JoinType::Inner,
        factor,
        condition: JoinCondition::Using(columns.iter().map(|c| c.to_string()).collect()),
    }
}

/// An unqualified column expression
pub fn col(name: &str) -> Expr {
    Expr::Column(ColumnRef::new(name))
}

/// A qualified column expression
pub fn qcol(table: &str, name: &str) -> Expr {
    Expr::Column(ColumnRef::new(name).with_table(table))
}

/// An integer literal
pub fn lit_int(value: i64) -> Expr {
    Expr::Literal(Literal::Integer(value))
}

/// A string literal
pub fn lit_str(value: &str) -> Expr {
    Expr::Literal(Literal::String(value.to_string()))
}

/// `<left> = <right>`
pub fn eq(left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp {
        left: Box::new(left),
        op: BinaryOp::Eq,
        right: Box::new(right),
    }
}

/// A projection item without alias
pub fn item(expr: Expr) -> SelectItem {
    SelectItem::UnnamedExpr(expr)
}

/// A projection item with alias
pub fn aliased(expr: Expr, alias: &str) -> SelectItem {
    SelectItem::AliasedExpr {
        expr,
        alias: alias.to_string(),
    }
}
