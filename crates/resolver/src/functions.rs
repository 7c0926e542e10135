// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Supported scalar functions
//!
//! This module defines the closed set of scalar function names the
//! resolver accepts inside conditions and projected expressions.
//!
//! Membership is the only question the resolver asks: a call whose name
//! is outside this set is an unsupported construct at the call site,
//! never a silently passed-through string. The downstream SQL
//! generators know how to render exactly these functions per dialect.

use serde::{Deserialize, Serialize};

/// Scalar functions the resolver accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedFunction {
    Concat,
    Lower,
    Upper,
    Replace,
    Substring,
    Trim,
    Length,
    Abs,
    Round,
    Coalesce,
    Nullif,
    RegexpLike,
    ToChar,
}

impl SupportedFunction {
    /// Look up a function by its SQL name, case-insensitively
    ///
    /// Dialect spelling variants map to one entry (`SUBSTR` and
    /// `SUBSTRING`, `LENGTH` and `CHAR_LENGTH`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "CONCAT" => Some(SupportedFunction::Concat),
            "LOWER" => Some(SupportedFunction::Lower),
            "UPPER" => Some(SupportedFunction::Upper),
            "REPLACE" => Some(SupportedFunction::Replace),
            "SUBSTR" | "SUBSTRING" => Some(SupportedFunction::Substring),
            "TRIM" => Some(SupportedFunction::Trim),
            "LENGTH" | "CHAR_LENGTH" => Some(SupportedFunction::Length),
            "ABS" => Some(SupportedFunction::Abs),
            "ROUND" => Some(SupportedFunction::Round),
            "COALESCE" => Some(SupportedFunction::Coalesce),
            "NULLIF" => Some(SupportedFunction::Nullif),
            "REGEXP_LIKE" => Some(SupportedFunction::RegexpLike),
            "TO_CHAR" => Some(SupportedFunction::ToChar),
            _ => None,
        }
    }

    /// The canonical SQL name
    pub fn name(&self) -> &'static str {
        match self {
            SupportedFunction::Concat => "CONCAT",
            SupportedFunction::Lower => "LOWER",
            SupportedFunction::Upper => "UPPER",
            SupportedFunction::Replace => "REPLACE",
            SupportedFunction::Substring => "SUBSTRING",
            SupportedFunction::Trim => "TRIM",
            SupportedFunction::Length => "LENGTH",
            SupportedFunction::Abs => "ABS",
            SupportedFunction::Round => "ROUND",
            SupportedFunction::Coalesce => "COALESCE",
            SupportedFunction::Nullif => "NULLIF",
            SupportedFunction::RegexpLike => "REGEXP_LIKE",
            SupportedFunction::ToChar => "TO_CHAR",
        }
    }
}
