// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Support
//!
//! This module defines the database dialects the wider toolchain
//! targets and the identifier-quoting behavior each one implies.
//!
//! ## Design
//!
//! The resolver itself is dialect-agnostic: the only dialect-varying
//! input is the [`QuotingConfig`] that drives identifier normalization.
//! All dialects accept the four common quoting styles (mapping sources
//! are written against many backends); what differs is how an unquoted
//! identifier is case-folded before comparison:
//!
//! - **Oracle, DB2, H2**: fold to upper case
//! - **PostgreSQL**: fold to lower case
//! - **MySQL, SQL Server**: compared as written

use crate::ident::{CaseFold, QuotingConfig};
use serde::{Deserialize, Serialize};

/// Supported target dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    PostgreSQL,
    MySQL,
    Oracle,
    Db2,
    SqlServer,
    H2,
}

impl Dialect {
    /// The quotation-style configuration for this dialect
    pub fn quoting(&self) -> QuotingConfig {
        QuotingConfig::standard(self.fold())
    }

    /// The case fold applied to unquoted identifiers
    pub fn fold(&self) -> CaseFold {
        match self {
            Dialect::Oracle | Dialect::Db2 | Dialect::H2 => CaseFold::Upper,
            Dialect::PostgreSQL => CaseFold::Lower,
            Dialect::MySQL | Dialect::SqlServer => CaseFold::Preserve,
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::H2
    }
}
