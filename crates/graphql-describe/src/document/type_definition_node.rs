use crate::model::NodeKind;
use apollo_parser::cst;

/// The text of an optional CST name, or an empty string when absent.
///
/// Names are only ever absent in trees with syntax errors, which are
/// rejected before any node is inspected.
pub(crate) fn text_of(name: Option<cst::Name>) -> String {
    name.map(|name| name.text().to_string()).unwrap_or_default()
}

fn named_types(named_types: impl Iterator<Item = cst::NamedType>) -> Vec<String> {
    named_types.map(|named| text_of(named.name())).collect()
}

/// A field-like child of a type definition.
#[derive(Clone, Debug)]
pub(crate) enum FieldDefinitionNode {
    /// A field of an object or interface type.
    Output(cst::FieldDefinition),
    /// A field of an input object type.
    Input(cst::InputValueDefinition),
}

/// A top-level type definition or type extension node.
#[derive(Clone, Debug)]
pub(crate) enum TypeDefinitionNode {
    Enum(cst::EnumTypeDefinition),
    EnumExtension(cst::EnumTypeExtension),
    InputObject(cst::InputObjectTypeDefinition),
    InputObjectExtension(cst::InputObjectTypeExtension),
    Interface(cst::InterfaceTypeDefinition),
    InterfaceExtension(cst::InterfaceTypeExtension),
    Object(cst::ObjectTypeDefinition),
    ObjectExtension(cst::ObjectTypeExtension),
    Scalar(cst::ScalarTypeDefinition),
    ScalarExtension(cst::ScalarTypeExtension),
    Union(cst::UnionTypeDefinition),
    UnionExtension(cst::UnionTypeExtension),
}
impl TypeDefinitionNode {
    pub(crate) fn kind(&self) -> NodeKind {
        match self {
            Self::Enum(_) => NodeKind::EnumTypeDefinition,
            Self::EnumExtension(_) => NodeKind::EnumTypeExtension,
            Self::InputObject(_) => NodeKind::InputObjectTypeDefinition,
            Self::InputObjectExtension(_) => NodeKind::InputObjectTypeExtension,
            Self::Interface(_) => NodeKind::InterfaceTypeDefinition,
            Self::InterfaceExtension(_) => NodeKind::InterfaceTypeExtension,
            Self::Object(_) => NodeKind::ObjectTypeDefinition,
            Self::ObjectExtension(_) => NodeKind::ObjectTypeExtension,
            Self::Scalar(_) => NodeKind::ScalarTypeDefinition,
            Self::ScalarExtension(_) => NodeKind::ScalarTypeExtension,
            Self::Union(_) => NodeKind::UnionTypeDefinition,
            Self::UnionExtension(_) => NodeKind::UnionTypeExtension,
        }
    }

    pub(crate) fn name(&self) -> String {
        text_of(match self {
            Self::Enum(def) => def.name(),
            Self::EnumExtension(ext) => ext.name(),
            Self::InputObject(def) => def.name(),
            Self::InputObjectExtension(ext) => ext.name(),
            Self::Interface(def) => def.name(),
            Self::InterfaceExtension(ext) => ext.name(),
            Self::Object(def) => def.name(),
            Self::ObjectExtension(ext) => ext.name(),
            Self::Scalar(def) => def.name(),
            Self::ScalarExtension(ext) => ext.name(),
            Self::Union(def) => def.name(),
            Self::UnionExtension(ext) => ext.name(),
        })
    }

    /// Extensions never carry a description.
    pub(crate) fn description(&self) -> Option<String> {
        let description = match self {
            Self::Enum(def) => def.description(),
            Self::InputObject(def) => def.description(),
            Self::Interface(def) => def.description(),
            Self::Object(def) => def.description(),
            Self::Scalar(def) => def.description(),
            Self::Union(def) => def.description(),
            Self::EnumExtension(_)
                | Self::InputObjectExtension(_)
                | Self::InterfaceExtension(_)
                | Self::ObjectExtension(_)
                | Self::ScalarExtension(_)
                | Self::UnionExtension(_) => None,
        };
        description
            .and_then(|description| description.string_value())
            .map(String::from)
    }

    /// `Some` (possibly empty) iff this kind of node has a field list.
    pub(crate) fn fields(&self) -> Option<Vec<FieldDefinitionNode>> {
        let output_fields = |fields: Option<cst::FieldsDefinition>| {
            fields.map(|fields| {
                fields.field_definitions()
                    .map(FieldDefinitionNode::Output)
                    .collect::<Vec<_>>()
            }).unwrap_or_default()
        };
        let input_fields = |fields: Option<cst::InputFieldsDefinition>| {
            fields.map(|fields| {
                fields.input_value_definitions()
                    .map(FieldDefinitionNode::Input)
                    .collect::<Vec<_>>()
            }).unwrap_or_default()
        };

        match self {
            Self::Interface(def) => Some(output_fields(def.fields_definition())),
            Self::InterfaceExtension(ext) => Some(output_fields(ext.fields_definition())),
            Self::Object(def) => Some(output_fields(def.fields_definition())),
            Self::ObjectExtension(ext) => Some(output_fields(ext.fields_definition())),
            Self::InputObject(def) => Some(input_fields(def.input_fields_definition())),
            Self::InputObjectExtension(ext) => Some(input_fields(ext.input_fields_definition())),
            Self::Enum(_)
                | Self::EnumExtension(_)
                | Self::Scalar(_)
                | Self::ScalarExtension(_)
                | Self::Union(_)
                | Self::UnionExtension(_) => None,
        }
    }

    /// `Some` (possibly empty) iff this is an enum node.
    pub(crate) fn enum_values(&self) -> Option<Vec<String>> {
        let values = match self {
            Self::Enum(def) => def.enum_values_definition(),
            Self::EnumExtension(ext) => ext.enum_values_definition(),
            _ => return None,
        };
        Some(values.map(|values| {
            values.enum_value_definitions()
                .map(|value| text_of(value.enum_value().and_then(|value| value.name())))
                .collect()
        }).unwrap_or_default())
    }

    /// `Some` (possibly empty) iff this is a union node.
    pub(crate) fn union_members(&self) -> Option<Vec<String>> {
        let members = match self {
            Self::Union(def) => def.union_member_types(),
            Self::UnionExtension(ext) => ext.union_member_types(),
            _ => return None,
        };
        Some(members
            .map(|members| named_types(members.named_types()))
            .unwrap_or_default())
    }

    /// Names listed in this node's `implements` clause.
    pub(crate) fn interfaces(&self) -> Vec<String> {
        let interfaces = match self {
            Self::Interface(def) => def.implements_interfaces(),
            Self::InterfaceExtension(ext) => ext.implements_interfaces(),
            Self::Object(def) => def.implements_interfaces(),
            Self::ObjectExtension(ext) => ext.implements_interfaces(),
            _ => None,
        };
        interfaces
            .map(|interfaces| named_types(interfaces.named_types()))
            .unwrap_or_default()
    }
}
