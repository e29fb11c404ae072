use crate::document::TypeDefinitionNode;
use apollo_parser::cst;

/// Closed classification of a top-level document definition.
#[derive(Clone, Debug)]
pub(crate) enum DefinitionNode {
    Directive(cst::DirectiveDefinition),
    /// Executable definitions and schema extensions; never modelled.
    Other(&'static str),
    Schema(cst::SchemaDefinition),
    Type(TypeDefinitionNode),
    TypeExtension(TypeDefinitionNode),
}
impl std::convert::From<cst::Definition> for DefinitionNode {
    fn from(def: cst::Definition) -> Self {
        use cst::Definition;
        match def {
            Definition::DirectiveDefinition(def) => Self::Directive(def),
            Definition::SchemaDefinition(def) => Self::Schema(def),

            Definition::EnumTypeDefinition(def) =>
                Self::Type(TypeDefinitionNode::Enum(def)),
            Definition::InputObjectTypeDefinition(def) =>
                Self::Type(TypeDefinitionNode::InputObject(def)),
            Definition::InterfaceTypeDefinition(def) =>
                Self::Type(TypeDefinitionNode::Interface(def)),
            Definition::ObjectTypeDefinition(def) =>
                Self::Type(TypeDefinitionNode::Object(def)),
            Definition::ScalarTypeDefinition(def) =>
                Self::Type(TypeDefinitionNode::Scalar(def)),
            Definition::UnionTypeDefinition(def) =>
                Self::Type(TypeDefinitionNode::Union(def)),

            Definition::EnumTypeExtension(ext) =>
                Self::TypeExtension(TypeDefinitionNode::EnumExtension(ext)),
            Definition::InputObjectTypeExtension(ext) =>
                Self::TypeExtension(TypeDefinitionNode::InputObjectExtension(ext)),
            Definition::InterfaceTypeExtension(ext) =>
                Self::TypeExtension(TypeDefinitionNode::InterfaceExtension(ext)),
            Definition::ObjectTypeExtension(ext) =>
                Self::TypeExtension(TypeDefinitionNode::ObjectExtension(ext)),
            Definition::ScalarTypeExtension(ext) =>
                Self::TypeExtension(TypeDefinitionNode::ScalarExtension(ext)),
            Definition::UnionTypeExtension(ext) =>
                Self::TypeExtension(TypeDefinitionNode::UnionExtension(ext)),

            Definition::FragmentDefinition(_) => Self::Other("fragment definition"),
            Definition::OperationDefinition(_) => Self::Other("operation definition"),
            Definition::SchemaExtension(_) => Self::Other("schema extension"),
        }
    }
}
