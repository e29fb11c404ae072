use crate::model::SchemaModel;
use serde_json::json;

#[test]
fn serializes_as_flat_map() {
    let model = SchemaModel::from_sdl(concat!(
        "directive @auth on FIELD_DEFINITION\n",
        "\"An account\"\n",
        "type User {\n",
        "  friends(first: Int!): [User!]\n",
        "}\n",
        "enum Role { ADMIN }\n",
        "schema { query: User }\n",
    )).expect("SDL should describe");

    assert_eq!(serde_json::to_value(&model).expect("model should serialize"), json!({
        "schemaDefinition": {
            "query": {
                "type": "OperationTypeDefinition",
                "operation": "query",
                "field": "User",
            },
        },
        "User": {
            "kind": "ObjectTypeDefinition",
            "description": "An account",
            "fields": [{
                "name": "friends",
                "type": "User",
                "isNullable": true,
                "isList": true,
                "listElementsNonNull": true,
                "arguments": [{
                    "name": "first",
                    "type": "Int",
                    "isNullable": false,
                    "isList": false,
                    "listElementsNonNull": false,
                    "isDeprecated": false,
                }],
                "isDeprecated": false,
            }],
            "values": [],
            "unionMembers": [],
            "implementedInterfaces": [],
        },
        "Role": {
            "kind": "EnumTypeDefinition",
            "fields": [],
            "values": ["ADMIN"],
            "unionMembers": [],
            "implementedInterfaces": [],
        },
    }));
}

#[test]
fn directive_names_are_not_serialized() {
    let model = SchemaModel::from_sdl("directive @auth on FIELD_DEFINITION")
        .expect("SDL should describe");

    assert_eq!(model.directive_names(), ["auth".to_string()]);
    assert!(model.is_empty());
    assert_eq!(serde_json::to_value(&model).expect("model should serialize"), json!({}));
}

/// Tests that a type named `schemaDefinition` is emitted once, in place of
/// the root operation bindings, which stay available through the accessor.
#[test]
fn type_named_schema_definition_takes_the_key() {
    let model = SchemaModel::from_sdl(concat!(
        "type Query { a: Int }\n",
        "type schemaDefinition { b: Int }\n",
        "schema { query: Query }\n",
    )).expect("SDL should describe");

    let json = serde_json::to_string(&model).expect("model should serialize");
    assert_eq!(json.matches("\"schemaDefinition\"").count(), 1);

    let value: serde_json::Value = serde_json::from_str(json.as_str())
        .expect("output should be valid JSON");
    assert_eq!(value["schemaDefinition"]["kind"], "ObjectTypeDefinition");
    assert_eq!(value["schemaDefinition"]["fields"][0]["name"], "b");
    assert!(model.schema_definition().is_some_and(|def| def.query.is_some()));
}

#[test]
#[should_panic]
fn indexing_an_unknown_type_panics() {
    let model = SchemaModel::from_sdl("type Query { a: Int }")
        .expect("SDL should describe");

    assert!(model.get("Missing").is_none());
    let _ = &model["Missing"];
}
