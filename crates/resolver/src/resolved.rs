// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Resolved expressions
//!
//! This module defines the resolved mirror of the AST expression type.
//!
//! A [`ResolvedExpr`] is what a condition or projected expression looks
//! like after normalization: every `Column` leaf has been replaced by
//! its canonical [`QualifiedAttributeRef`], function names have been
//! checked against the closed supported set, and only the node kinds
//! the downstream rewriter understands remain. Literals pass through
//! unchanged.

use serde::Serialize;

use crate::functions::SupportedFunction;
use ontomap_ir::{BinaryOp, Literal, QualifiedAttributeRef, UnaryOp};

/// An expression with all column references resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResolvedExpr {
    /// Canonical attribute reference (was a `Column` leaf)
    Attribute(QualifiedAttributeRef),

    /// Literal value, passed through unchanged
    Literal(Literal),

    /// Binary operation over resolved operands
    BinaryOp {
        left: Box<ResolvedExpr>,
        op: BinaryOp,
        right: Box<ResolvedExpr>,
    },

    /// Unary operation (numeric negation only)
    UnaryOp {
        op: UnaryOp,
        expr: Box<ResolvedExpr>,
    },

    /// Call to a supported scalar function
    Function {
        function: SupportedFunction,
        args: Vec<ResolvedExpr>,
    },

    /// Parenthesized expression
    Paren(Box<ResolvedExpr>),

    /// Literal list (right-hand side of IN)
    List(Vec<ResolvedExpr>),
}

impl ResolvedExpr {
    /// Collect every attribute reference in this tree, in occurrence order
    pub fn attributes(&self) -> Vec<&QualifiedAttributeRef> {
        let mut found = Vec::new();
        self.collect_attributes(&mut found);
        found
    }

    fn collect_attributes<'a>(&'a self, found: &mut Vec<&'a QualifiedAttributeRef>) {
        match self {
            ResolvedExpr::Attribute(reference) => found.push(reference),
            ResolvedExpr::Literal(_) => {}
            ResolvedExpr::BinaryOp { left, right, .. } => {
                left.collect_attributes(found);
                right.collect_attributes(found);
            }
            ResolvedExpr::UnaryOp { expr, .. } => expr.collect_attributes(found),
            ResolvedExpr::Function { args, .. } => {
                for arg in args {
                    arg.collect_attributes(found);
                }
            }
            ResolvedExpr::Paren(inner) => inner.collect_attributes(found),
            ResolvedExpr::List(items) => {
                for item in items {
                    item.collect_attributes(found);
                }
            }
        }
    }
}
