// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for the catalog crate

use ontomap_catalog::{Catalog, CatalogError, CatalogSnapshot, StaticCatalog};
use ontomap_ir::{AttributeMetadata, DataType, Dialect, RelationMetadata, RelationRef};

// Mock catalog implementation exercising the trait directly
struct TestCatalog;

#[async_trait::async_trait]
impl Catalog for TestCatalog {
    async fn list_relations(&self) -> ontomap_catalog::CatalogResult<Vec<RelationMetadata>> {
        Ok(vec![
            RelationMetadata::new("PERSON")
                .with_attributes(vec![
                    AttributeMetadata::new("idPerson", DataType::Integer).with_primary_key(),
                    AttributeMetadata::new("name", DataType::Varchar(Some(100))),
                    AttributeMetadata::new("age", DataType::Integer),
                ])
                .with_comment("People referenced by the mappings"),
            RelationMetadata::new("EMAIL").with_attributes(vec![
                AttributeMetadata::new("idPerson", DataType::Integer),
                AttributeMetadata::new("idEmail", DataType::Integer).with_primary_key(),
                AttributeMetadata::new("email", DataType::Varchar(Some(255))),
                AttributeMetadata::new("active", DataType::Boolean),
            ]),
        ])
    }

    async fn get_attributes(
        &self,
        schema: Option<&str>,
        name: &str,
    ) -> ontomap_catalog::CatalogResult<Vec<AttributeMetadata>> {
        let relations = self.list_relations().await?;
        relations
            .into_iter()
            .find(|r| r.name == name && r.schema.as_deref() == schema)
            .map(|r| r.attributes)
            .ok_or_else(|| CatalogError::RelationNotFound {
                name: name.to_string(),
                schema: schema.map(str::to_string),
            })
    }

    fn dialect(&self) -> Dialect {
        Dialect::H2
    }
}

#[tokio::test]
async fn test_trait_surface() {
    let catalog = TestCatalog;

    let relations = catalog.list_relations().await.unwrap();
    assert_eq!(relations.len(), 2);
    assert_eq!(relations[0].primary_keys().len(), 1);

    let attributes = catalog.get_attributes(None, "EMAIL").await.unwrap();
    assert_eq!(attributes.len(), 4);

    let missing = catalog.get_attributes(Some("hr"), "EMAIL").await;
    assert!(matches!(
        missing,
        Err(CatalogError::RelationNotFound { .. })
    ));
}

#[tokio::test]
async fn test_snapshot_load_normalizes() {
    let catalog = TestCatalog;
    let snapshot = CatalogSnapshot::load(&catalog).await.unwrap();

    assert_eq!(snapshot.len(), 2);

    // H2 folds unquoted lexemes to upper case, so any casing of the
    // unquoted name finds the relation
    let reference = RelationRef::normalize(None, "person", snapshot.quoting());
    let definition = snapshot.lookup(&reference).unwrap();
    assert_eq!(definition.attributes.len(), 3);
}

#[tokio::test]
async fn test_static_catalog_round_trip() {
    let source = TestCatalog;
    let relations = source.list_relations().await.unwrap();

    let catalog = StaticCatalog::new(relations, Dialect::H2);
    assert_eq!(catalog.len(), 2);

    let snapshot = CatalogSnapshot::load(&catalog).await.unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.relations().count(), 2);
}
