// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Query Representation
//!
//! This module represents parsed SQL `SELECT` statements.
//!
//! ## Design
//!
//! A [`Query`] is the unit the external parser hands to the resolver:
//! a body (a `SELECT` or a set operation) plus the statement-level
//! clauses (`WITH`, `ORDER BY`, `LIMIT`/`OFFSET`). The resolver binds a
//! narrow subset of this surface; everything else is representable so
//! that the unsupported-construct checks are driven by data rather than
//! by which visitor methods happen to exist.
//!
//! ## FROM items and joins
//!
//! [`TableFactor`] is the tagged union of things that can appear as a
//! `FROM` item or a join right-hand side:
//!
//! - `Relation`: a base table, optionally schema-qualified and aliased
//! - `Derived`: a parenthesized sub-select, optionally `LATERAL`
//! - `NestedJoin`: `(a JOIN b)` used as a single item
//! - `Values`: a `VALUES` list
//!
//! Only the first two are resolvable; the others exist to be rejected
//! by name.
//!
//! ```sql
//! -- INNER JOIN with ON
//! FROM person p INNER JOIN email e ON p.idPerson = e.idPerson
//!
//! -- USING clause
//! FROM person JOIN email USING (idPerson)
//!
//! -- NATURAL JOIN
//! FROM person NATURAL JOIN email
//! ```
//!
//! ## Projection items
//!
//! [`SelectItem`] mirrors the four projection forms the resolver
//! distinguishes: `*`, `table.*`, a bare expression, and an aliased
//! expression.

use crate::expr::Expr;
use serde::{Deserialize, Serialize};

/// A SQL query (SELECT statement or set operation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Optional WITH clause (CTEs)
    pub ctes: Vec<CommonTableExpr>,

    /// The main body of the query
    pub body: SetOp,

    /// ORDER BY clause
    pub order_by: Vec<OrderByItem>,

    /// Optional LIMIT clause
    pub limit: Option<Expr>,

    /// Optional OFFSET clause
    pub offset: Option<Expr>,
}

impl Query {
    /// Wrap a `SELECT` statement into a bare query
    pub fn select(select: SelectStatement) -> Self {
        Self {
            ctes: Vec::new(),
            body: SetOp::Select(Box::new(select)),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    pub fn with_ctes(mut self, ctes: impl IntoIterator<Item = CommonTableExpr>) -> Self {
        self.ctes = ctes.into_iter().collect();
        self
    }

    pub fn with_order_by(mut self, order_by: Vec<OrderByItem>) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn with_limit(mut self, limit: Expr) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: Expr) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::select(SelectStatement::default())
    }
}

/// Set operation (UNION, INTERSECT, EXCEPT) or SELECT
///
/// Oracle's `MINUS` arrives as `Except`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SetOp {
    /// SELECT statement
    Select(Box<SelectStatement>),

    /// UNION [ALL]
    Union {
        left: Box<Query>,
        right: Box<Query>,
        all: bool,
    },

    /// INTERSECT
    Intersect { left: Box<Query>, right: Box<Query> },

    /// EXCEPT / MINUS
    Except { left: Box<Query>, right: Box<Query> },
}

/// SELECT statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    /// SELECT DISTINCT
    pub distinct: bool,

    /// Projection list (columns to select)
    pub projection: Vec<SelectItem>,

    /// FROM clause: comma-separated items, each with its join chain
    pub from: Vec<TableWithJoins>,

    /// WHERE clause
    pub where_clause: Option<Expr>,

    /// GROUP BY clause
    pub group_by: Vec<Expr>,

    /// HAVING clause
    pub having: Option<Expr>,

    /// SELECT INTO target
    pub into: Option<String>,

    /// Hierarchical (CONNECT BY) condition
    pub connect_by: Option<Expr>,
}

impl Default for SelectStatement {
    fn default() -> Self {
        Self {
            distinct: false,
            projection: Vec::new(),
            from: Vec::new(),
            where_clause: None,
            group_by: Vec::new(),
            having: None,
            into: None,
            connect_by: None,
        }
    }
}

impl SelectStatement {
    pub fn with_projection(mut self, projection: Vec<SelectItem>) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_from(mut self, from: Vec<TableWithJoins>) -> Self {
        self.from = from;
        self
    }

    pub fn with_where(mut self, where_clause: Expr) -> Self {
        self.where_clause = Some(where_clause);
        self
    }

    pub fn with_distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}

/// Item in a SELECT projection list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectItem {
    /// Unqualified wildcard (`*`)
    Wildcard,

    /// Qualified wildcard (e.g., `table.*`)
    QualifiedWildcard(String),

    /// Unnamed expression (e.g., `column`)
    UnnamedExpr(Expr),

    /// Expression with alias (e.g., `col AS name`)
    AliasedExpr { expr: Expr, alias: String },
}

/// A FROM item together with the joins chained onto it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableWithJoins {
    /// The leading item
    pub factor: TableFactor,

    /// Joins, in source order
    pub joins: Vec<Join>,
}

impl TableWithJoins {
    pub fn new(factor: TableFactor) -> Self {
        Self {
            factor,
            joins: Vec::new(),
        }
    }

    pub fn with_joins(mut self, joins: Vec<Join>) -> Self {
        self.joins = joins;
        self
    }
}

/// A single FROM item or join right-hand side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableFactor {
    /// Base relation, optionally schema-qualified and aliased
    Relation {
        schema: Option<String>,
        name: String,
        alias: Option<String>,
    },

    /// Parenthesized sub-select
    Derived {
        lateral: bool,
        subquery: Box<Query>,
        alias: Option<String>,
    },

    /// `(a JOIN b)` used as a single item
    NestedJoin(Box<TableWithJoins>),

    /// `VALUES (...)` list
    Values {
        rows: Vec<Vec<Expr>>,
        alias: Option<String>,
    },
}

impl TableFactor {
    /// Create an unaliased base relation factor
    pub fn relation(name: impl Into<String>) -> Self {
        TableFactor::Relation {
            schema: None,
            name: name.into(),
            alias: None,
        }
    }
}

/// JOIN clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    /// Join type
    pub join_type: JoinType,

    /// Item being joined
    pub factor: TableFactor,

    /// Join condition
    pub condition: JoinCondition,
}

/// Join type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

/// Join condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinCondition {
    /// ON expression
    On(Expr),

    /// USING (col, ...)
    Using(Vec<String>),

    /// NATURAL join
    Natural,

    /// No condition (cross join)
    None,
}

/// ORDER BY item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByItem {
    pub expr: Expr,
    pub descending: bool,
}

/// Common Table Expression (WITH clause entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonTableExpr {
    pub name: String,
    pub columns: Vec<String>,
    pub query: Box<Query>,
}
