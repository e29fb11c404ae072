use crate::model::SchemaModel;
use crate::SchemaModelError;

type Result<T> = std::result::Result<T, SchemaModelError>;

#[test]
fn interface_lists_its_implementors() -> Result<()> {
    let model = SchemaModel::from_sdl(concat!(
        "interface User { id: ID! }\n",
        "type Student implements User { id: ID! }\n",
        "type Teacher implements User { id: ID! }\n",
    ))?;

    assert_eq!(model["User"].implemented_interfaces, vec!["Student", "Teacher"]);
    assert_eq!(model["Student"].implemented_interfaces, vec!["User"]);
    assert!(model["Teacher"].implements("User"));
    Ok(())
}

/// Tests that an interface implementing another interface keeps its own
/// declarations first and only receives back-links from its implementors.
#[test]
fn interface_hierarchy() -> Result<()> {
    let model = SchemaModel::from_sdl(concat!(
        "interface Node { id: ID! }\n",
        "interface User implements Node { id: ID! }\n",
        "type Student implements User & Node { id: ID! }\n",
    ))?;

    assert_eq!(model["Node"].implemented_interfaces, vec!["User", "Student"]);
    assert_eq!(model["User"].implemented_interfaces, vec!["Node", "Student"]);
    assert_eq!(model["Student"].implemented_interfaces, vec!["User", "Node"]);
    Ok(())
}

#[test]
fn non_interface_targets_get_no_back_link() -> Result<()> {
    let model = SchemaModel::from_sdl(concat!(
        "type A { a: Int }\n",
        "type B implements A { a: Int }\n",
    ))?;

    assert!(model["A"].implemented_interfaces.is_empty());
    assert_eq!(model["B"].implemented_interfaces, vec!["A"]);
    Ok(())
}

#[test]
fn unknown_interfaces_are_kept_without_error() -> Result<()> {
    let model = SchemaModel::from_sdl("type B implements Missing { a: Int }")?;

    assert_eq!(model["B"].implemented_interfaces, vec!["Missing"]);
    assert!(model.get("Missing").is_none());
    Ok(())
}

#[test]
fn interfaces_added_by_extension() -> Result<()> {
    let model = SchemaModel::from_sdl(concat!(
        "type User { id: ID }\n",
        "interface Node { id: ID }\n",
        "extend type User implements Node\n",
    ))?;

    assert_eq!(model["User"].implemented_interfaces, vec!["Node"]);
    assert_eq!(model["Node"].implemented_interfaces, vec!["User"]);
    Ok(())
}

#[test]
fn standalone_interface_extension_receives_back_links() -> Result<()> {
    let model = SchemaModel::from_sdl(concat!(
        "extend interface Node { id: ID }\n",
        "type User implements Node { id: ID }\n",
    ))?;

    assert_eq!(model["Node"].implemented_interfaces, vec!["User"]);
    Ok(())
}
