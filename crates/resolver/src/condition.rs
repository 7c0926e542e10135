// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Condition normalization
//!
//! This module rewrites `ON` and `WHERE` expression trees into their
//! resolved form.
//!
//! ## Supported grammar
//!
//! Conditions are a three-level grammar:
//!
//! - **boolean level**: `AND`/`OR` over predicates, parentheses;
//! - **predicate level**: comparison operators; `WHERE` additionally
//!   admits the `LIKE` family, `IS [NOT]`, and `IN` over a literal
//!   list;
//! - **operand level**: column references (resolved through the
//!   attribute gate), literals, numeric negation, arithmetic, and
//!   calls to supported scalar functions.
//!
//! Anything outside this — subquery comparisons, `CASE`, `CAST`, bare
//! arithmetic standing as a boolean, `EXISTS` — fails fast as an
//! unsupported construct. Column leaves are replaced by their canonical
//! references; literal leaves pass through unchanged.

use crate::attribute::resolve_attribute;
use crate::error::{ResolutionError, ResolutionResult};
use crate::functions::SupportedFunction;
use crate::resolved::ResolvedExpr;
use crate::scope::Scope;
use ontomap_ir::{BinaryOp, Expr, QualifiedAttributeRef, QuotingConfig, UnaryOp};

/// Where a condition appears, deciding which predicates are admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConditionContext {
    /// `ON` clause of a join: comparison predicates only
    Join,
    /// `WHERE` clause: comparisons plus LIKE / IS / IN-list
    Filter,
}

/// Normalize a boolean condition
pub(crate) fn normalize_condition(
    scope: &Scope,
    expr: &Expr,
    quoting: &QuotingConfig,
    context: ConditionContext,
) -> ResolutionResult<ResolvedExpr> {
    match expr {
        Expr::BinaryOp { left, op, right }
            if matches!(op, BinaryOp::And | BinaryOp::Or) =>
        {
            Ok(ResolvedExpr::BinaryOp {
                left: Box::new(normalize_condition(scope, left, quoting, context)?),
                op: *op,
                right: Box::new(normalize_condition(scope, right, quoting, context)?),
            })
        }
        Expr::Paren(inner) => Ok(ResolvedExpr::Paren(Box::new(normalize_condition(
            scope, inner, quoting, context,
        )?))),
        _ => normalize_predicate(scope, expr, quoting, context),
    }
}

fn normalize_predicate(
    scope: &Scope,
    expr: &Expr,
    quoting: &QuotingConfig,
    context: ConditionContext,
) -> ResolutionResult<ResolvedExpr> {
    match expr {
        Expr::BinaryOp { left, op, right } if op.is_comparison() => {
            Ok(ResolvedExpr::BinaryOp {
                left: Box::new(normalize_value(scope, left, quoting)?),
                op: *op,
                right: Box::new(normalize_value(scope, right, quoting)?),
            })
        }
        Expr::BinaryOp { left, op, right }
            if context == ConditionContext::Filter
                && matches!(
                    op,
                    BinaryOp::Like
                        | BinaryOp::NotLike
                        | BinaryOp::ILike
                        | BinaryOp::NotILike
                        | BinaryOp::Is
                        | BinaryOp::IsNot
                ) =>
        {
            Ok(ResolvedExpr::BinaryOp {
                left: Box::new(normalize_value(scope, left, quoting)?),
                op: *op,
                right: Box::new(normalize_value(scope, right, quoting)?),
            })
        }
        Expr::BinaryOp { left, op, right }
            if context == ConditionContext::Filter
                && matches!(op, BinaryOp::In | BinaryOp::NotIn) =>
        {
            let items = match right.as_ref() {
                Expr::List(items) => items,
                other => {
                    return Err(ResolutionError::unsupported(format!(
                        "{} over {}",
                        describe_op(*op),
                        describe(other)
                    )));
                }
            };
            let list = items
                .iter()
                .map(|item| match item {
                    Expr::Literal(literal) => Ok(ResolvedExpr::Literal(literal.clone())),
                    other => Err(ResolutionError::unsupported(format!(
                        "non-literal {} element: {}",
                        describe_op(*op),
                        describe(other)
                    ))),
                })
                .collect::<ResolutionResult<Vec<_>>>()?;

            Ok(ResolvedExpr::BinaryOp {
                left: Box::new(normalize_value(scope, left, quoting)?),
                op: *op,
                right: Box::new(ResolvedExpr::List(list)),
            })
        }
        other => Err(ResolutionError::unsupported(format!(
            "{} as a condition",
            describe(other)
        ))),
    }
}

/// Normalize a value-level operand
///
/// Also used by the projection resolver for aliased non-trivial
/// expressions, which are value expressions by definition.
pub(crate) fn normalize_value(
    scope: &Scope,
    expr: &Expr,
    quoting: &QuotingConfig,
) -> ResolutionResult<ResolvedExpr> {
    match expr {
        Expr::Column(column) => {
            let reference =
                QualifiedAttributeRef::normalize(column.table.as_deref(), &column.column, quoting);
            Ok(ResolvedExpr::Attribute(resolve_attribute(scope, &reference)?))
        }
        Expr::Literal(literal) => Ok(ResolvedExpr::Literal(literal.clone())),
        Expr::Paren(inner) => Ok(ResolvedExpr::Paren(Box::new(normalize_value(
            scope, inner, quoting,
        )?))),
        Expr::UnaryOp {
            op: UnaryOp::Neg,
            expr,
        } => Ok(ResolvedExpr::UnaryOp {
            op: UnaryOp::Neg,
            expr: Box::new(normalize_value(scope, expr, quoting)?),
        }),
        Expr::BinaryOp { left, op, right } if op.is_arithmetic() => {
            Ok(ResolvedExpr::BinaryOp {
                left: Box::new(normalize_value(scope, left, quoting)?),
                op: *op,
                right: Box::new(normalize_value(scope, right, quoting)?),
            })
        }
        Expr::Function {
            name,
            args,
            distinct,
        } => {
            if *distinct {
                return Err(ResolutionError::unsupported(
                    "DISTINCT in a scalar function call",
                ));
            }
            let function = SupportedFunction::from_name(name).ok_or_else(|| {
                ResolutionError::unsupported(format!("function {name}"))
            })?;
            let args = args
                .iter()
                .map(|arg| normalize_value(scope, arg, quoting))
                .collect::<ResolutionResult<Vec<_>>>()?;
            Ok(ResolvedExpr::Function { function, args })
        }
        other => Err(ResolutionError::unsupported(format!(
            "{} as an operand",
            describe(other)
        ))),
    }
}

/// Human-readable name of an expression node kind, for error messages
fn describe(expr: &Expr) -> String {
    match expr {
        Expr::Column(column) => format!("column {}", column.qualified()),
        Expr::Literal(_) => "literal".to_string(),
        Expr::BinaryOp { op, .. } => describe_op(*op),
        Expr::UnaryOp {
            op: UnaryOp::Not, ..
        } => "NOT".to_string(),
        Expr::UnaryOp {
            op: UnaryOp::Exists,
            ..
        } => "EXISTS".to_string(),
        Expr::UnaryOp {
            op: UnaryOp::Neg, ..
        } => "negation".to_string(),
        Expr::Function { name, .. } => format!("function {name}"),
        Expr::Case { .. } => "CASE expression".to_string(),
        Expr::Cast { .. } => "CAST expression".to_string(),
        Expr::Paren(_) => "parenthesized expression".to_string(),
        Expr::List(_) => "expression list".to_string(),
        Expr::Subquery(_) => "scalar subquery".to_string(),
    }
}

fn describe_op(op: BinaryOp) -> String {
    format!("operator {op:?}")
}
