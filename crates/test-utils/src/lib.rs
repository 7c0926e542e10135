// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # ontomap - Testing utilities
//!
//! Shared fixtures for the crate test suites: the reference catalog
//! (`PERSON`/`EMAIL`/`hr.DEPARTMENT`) and shorthand builders for the
//! AST trees an external parser would normally produce.

pub mod fixtures;
pub mod mock_catalog;

pub use mock_catalog::{spec_catalog, spec_relations, spec_snapshot};
