// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Expressions
//!
//! This module represents SQL expressions as produced by the external
//! parser.
//!
//! ## Design
//!
//! Expressions form a tree of raw lexemes: column references keep their
//! quoting characters intact, and nothing here is resolved against a
//! catalog. The resolver walks these trees read-only and produces its
//! own resolved mirror; the AST is never mutated in place.
//!
//! The variant set is a closed union over the node kinds the toolchain
//! can encounter. Kinds the resolver does not support (subqueries in
//! expressions, `CASE`, `CAST`, ...) are still representable so that
//! rejection is an exhaustive `match`, not a missing visitor method.

use serde::{Deserialize, Serialize};

/// A SQL expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Column reference (e.g., `table.column` or just `column`)
    Column(ColumnRef),

    /// Literal value
    Literal(Literal),

    /// Binary operation (e.g., `a + b`, `x = 5`)
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    /// Unary operation (e.g., `-x`, `NOT a`)
    UnaryOp { op: UnaryOp, expr: Box<Expr> },

    /// Function call (e.g., `CONCAT(a, b)`, `LOWER(name)`)
    Function {
        name: String,
        args: Vec<Expr>,
        distinct: bool,
    },

    /// CASE expression
    Case {
        conditions: Vec<Expr>,
        results: Vec<Expr>,
        else_result: Option<Box<Expr>>,
    },

    /// CAST expression
    Cast { expr: Box<Expr>, type_name: String },

    /// Parenthesized expression
    Paren(Box<Expr>),

    /// List of expressions (e.g., for IN clause)
    List(Vec<Expr>),

    /// Scalar subquery (e.g., `x = (SELECT ...)`)
    Subquery(Box<crate::query::Query>),
}

/// Column reference carrying raw lexemes
///
/// The optional qualifier is a single alias/relation lexeme; quoting
/// characters are preserved until the resolver normalizes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Optional table/alias qualifier
    pub table: Option<String>,
    /// Column name
    pub column: String,
}

impl ColumnRef {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            table: None,
            column: column.into(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn qualified(&self) -> String {
        match &self.table {
            Some(table) => format!("{}.{}", table, self.column),
            None => self.column.clone(),
        }
    }
}

/// Literal value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // String
    Like,
    NotLike,
    ILike,
    NotILike,

    // Other
    In,
    NotIn,
    Is,
    IsNot,
}

impl BinaryOp {
    /// Whether this operator is a plain comparison predicate
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq
                | BinaryOp::NotEq
                | BinaryOp::Lt
                | BinaryOp::LtEq
                | BinaryOp::Gt
                | BinaryOp::GtEq
        )
    }

    /// Whether this operator is arithmetic
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod
        )
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Not,
    Exists,
}
