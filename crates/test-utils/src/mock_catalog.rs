// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Canonical catalog fixtures shared across crate tests

use ontomap_catalog::{CatalogSnapshot, StaticCatalog};
use ontomap_ir::{AttributeMetadata, DataType, Dialect, RelationMetadata};

/// The reference schema used throughout the test suites
///
/// `PERSON(idPerson, name, age)`, `EMAIL(idPerson, idEmail, email,
/// active)`, plus a schema-qualified `hr.DEPARTMENT` for qualified-name
/// coverage.
pub fn spec_relations() -> Vec<RelationMetadata> {
    vec![
        RelationMetadata::new("PERSON")
            .with_attributes(vec![
                AttributeMetadata::new("idPerson", DataType::Integer).with_primary_key(),
                AttributeMetadata::new("name", DataType::Varchar(Some(100))),
                AttributeMetadata::new("age", DataType::Integer),
            ])
            .with_comment("People referenced by the mappings"),
        RelationMetadata::new("EMAIL")
            .with_attributes(vec![
                AttributeMetadata::new("idPerson", DataType::Integer),
                AttributeMetadata::new("idEmail", DataType::Integer).with_primary_key(),
                AttributeMetadata::new("email", DataType::Varchar(Some(255))),
                AttributeMetadata::new("active", DataType::Boolean),
            ])
            .with_comment("Email addresses, many per person"),
        RelationMetadata::new("DEPARTMENT")
            .with_schema("hr")
            .with_attributes(vec![
                AttributeMetadata::new("idDepartment", DataType::Integer).with_primary_key(),
                AttributeMetadata::new("label", DataType::Varchar(Some(50))),
            ]),
    ]
}

/// A static catalog over the reference schema
pub fn spec_catalog(dialect: Dialect) -> StaticCatalog {
    StaticCatalog::new(spec_relations(), dialect)
}

/// A ready-made snapshot over the reference schema
pub fn spec_snapshot(dialect: Dialect) -> CatalogSnapshot {
    CatalogSnapshot::from_metadata(spec_relations(), dialect)
        .expect("reference schema is well-formed")
}
