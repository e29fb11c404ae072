use crate::document::ClassifiedDocument;
use crate::model::NodeKind;
use crate::SchemaModelError;

type Result<T> = std::result::Result<T, SchemaModelError>;

#[test]
fn types_keep_document_order() -> Result<()> {
    let doc = ClassifiedDocument::classify(concat!(
        "scalar Date\n",
        "type Query { today: Date }\n",
        "enum Color { RED GREEN }\n",
        "directive @auth(role: String) on FIELD_DEFINITION\n",
    ))?;

    assert_eq!(doc.types.keys().collect::<Vec<_>>(), vec!["Date", "Query", "Color"]);
    assert!(doc.schema_def.is_none());
    assert_eq!(doc.directive_names(), vec!["auth".to_string()]);
    Ok(())
}

/// Tests that a second `schema { ... }` block aborts classification no
/// matter what the two blocks contain.
#[test]
fn second_schema_block_is_rejected() {
    let err = ClassifiedDocument::classify(concat!(
        "type Query { a: Int }\n",
        "type Mutation { b: Int }\n",
        "schema { query: Query }\n",
        "schema { mutation: Mutation }\n",
    )).unwrap_err();

    assert_eq!(err, SchemaModelError::DuplicateSchemaDefinition);
    assert_eq!(err.to_string(), "Must provide only one schema definition.");
}

#[test]
fn same_name_across_kinds_is_a_duplicate() {
    let err = ClassifiedDocument::classify(concat!(
        "type School { name: String }\n",
        "enum School { PUBLIC PRIVATE }\n",
    )).unwrap_err();

    assert_eq!(err, SchemaModelError::DuplicateTypeDefinition {
        type_name: "School".to_string(),
    });
    assert_eq!(err.to_string(), "Type \"School\" was defined more than once.");
}

#[test]
fn extension_is_folded_into_its_base() -> Result<()> {
    let doc = ClassifiedDocument::classify(concat!(
        "type User { id: ID }\n",
        "extend type User { name: String }\n",
        "extend type User { email: String }\n",
    ))?;

    assert_eq!(doc.types.len(), 1);
    let user = &doc.types["User"];
    assert_eq!(user.primary.kind(), NodeKind::ObjectTypeDefinition);
    assert_eq!(user.extensions.len(), 2);
    assert_eq!(user.nodes().count(), 3);
    Ok(())
}

/// Tests that an extension with no base declaration in the document stands
/// in as the type's primary node.
#[test]
fn extension_without_base_becomes_primary() -> Result<()> {
    let doc = ClassifiedDocument::classify("extend type User { name: String }")?;

    let user = &doc.types["User"];
    assert_eq!(user.primary.kind(), NodeKind::ObjectTypeExtension);
    assert!(user.primary.kind().is_extension());
    assert!(user.extensions.is_empty());
    Ok(())
}

#[test]
fn base_after_standalone_extension_is_a_duplicate() {
    let err = ClassifiedDocument::classify(concat!(
        "extend type User { name: String }\n",
        "type User { id: ID }\n",
    )).unwrap_err();

    assert_eq!(err, SchemaModelError::DuplicateTypeDefinition {
        type_name: "User".to_string(),
    });
}

#[test]
fn executable_definitions_are_ignored() -> Result<()> {
    let doc = ClassifiedDocument::classify(concat!(
        "type Query { a: Int }\n",
        "query GetA { a }\n",
        "fragment AFields on Query { a }\n",
    ))?;

    assert_eq!(doc.types.keys().collect::<Vec<_>>(), vec!["Query"]);
    Ok(())
}

#[test]
fn syntax_error_is_reported() {
    let err = ClassifiedDocument::classify("type Query {").unwrap_err();

    assert!(matches!(err, SchemaModelError::ParseError { .. }));
    assert!(err.to_string().starts_with("Syntax Error: "));
}

#[test]
fn descriptions_only_come_from_definitions() -> Result<()> {
    let doc = ClassifiedDocument::classify(concat!(
        "\"Someone with an account\"\n",
        "type User { id: ID }\n",
        "extend type User { name: String }\n",
    ))?;

    let user = &doc.types["User"];
    assert_eq!(user.primary.description(), Some("Someone with an account".to_string()));
    assert_eq!(user.extensions[0].description(), None);
    Ok(())
}

#[test]
fn legacy_implements_syntax_is_accepted() -> Result<()> {
    let doc = ClassifiedDocument::classify(concat!(
        "interface User { id: ID }\n",
        "interface Node { id: ID }\n",
        "type Student implements User Node { id: ID }\n",
    ))?;

    assert_eq!(doc.types["Student"].primary.interfaces(), vec!["User", "Node"]);
    Ok(())
}
