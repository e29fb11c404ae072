use crate::ast;
use crate::describe_schema;
use crate::model::NodeKind;
use crate::SchemaModelError;
use crate::SchemaSource;
use serde_json::json;

type Result<T> = std::result::Result<T, SchemaModelError>;

const INTROSPECTION_JSON: &str = include_str!("../../../tests/fixtures/introspection.json");

fn introspection_payload() -> serde_json::Value {
    serde_json::from_str(INTROSPECTION_JSON).expect("fixture should be valid JSON")
}

#[test]
fn sdl_is_used_verbatim() -> Result<()> {
    let sdl = "type Query { a: Int }";

    assert_eq!(SchemaSource::from(sdl).into_sdl()?, sdl);
    assert_eq!(SchemaSource::from(sdl.to_string()).into_sdl()?, sdl);
    Ok(())
}

#[test]
fn fragment_lists_are_merged() -> Result<()> {
    let model = describe_schema(vec!["type Query { a: Int }", "type Query { b: Int }"])?;

    assert_eq!(model["Query"].fields.len(), 2);
    Ok(())
}

#[test]
fn parsed_document_is_printed_and_described() -> Result<()> {
    let doc = ast::schema::parse("type Query { students(first: Int!): [String!] }")
        .expect("SDL should parse");
    let model = describe_schema(doc)?;

    let students = &model["Query"].fields[0];
    assert_eq!(students.name, "students");
    assert!(students.wrapped_type.is_list);
    assert!(students.wrapped_type.list_elements_non_null);
    assert_eq!(students.arguments[0].name, "first");
    Ok(())
}

#[test]
fn introspection_result_is_described() -> Result<()> {
    let model = describe_schema(introspection_payload())?;

    assert_eq!(model["User"].kind, NodeKind::ObjectTypeDefinition);
    assert_eq!(model["Node"].kind, NodeKind::InterfaceTypeDefinition);
    assert!(model["Node"].implements("User"));
    assert_eq!(model["Role"].values, vec!["ADMIN", "MEMBER"]);

    let user_field = model["Query"].field("user").expect("field should exist");
    assert_eq!(user_field.arguments[0].name, "id");
    assert!(!user_field.arguments[0].wrapped_type.is_nullable);
    Ok(())
}

/// Tests that the `{ "data": ... }` envelope of an introspection response is
/// optional.
#[test]
fn data_envelope_is_unwrapped() -> Result<()> {
    let wrapped = describe_schema(introspection_payload())?;
    let unwrapped = describe_schema(introspection_payload()["data"].clone())?;

    assert_eq!(wrapped, unwrapped);
    Ok(())
}

#[test]
fn built_schema_is_described() -> Result<()> {
    let mut payload = introspection_payload();
    let query: cynic_introspection::IntrospectionQuery =
        serde_json::from_value(payload["data"].take()).expect("fixture should decode");
    let schema = query.into_schema().expect("fixture should build a schema");

    let model = describe_schema(schema)?;
    assert!(model["Query"].field("users").is_some());
    Ok(())
}

#[test]
fn malformed_introspection_is_rejected() {
    let err = describe_schema(json!(42)).unwrap_err();

    assert!(matches!(err, SchemaModelError::IntrospectionDecodeError { .. }));
}
