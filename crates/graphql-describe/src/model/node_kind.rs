/// The AST node kind a record was built from.
///
/// Serializes as the GraphQL AST kind name (e.g. `ObjectTypeDefinition`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum NodeKind {
    EnumTypeDefinition,
    EnumTypeExtension,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    UnionTypeDefinition,
    UnionTypeExtension,
}
impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnumTypeDefinition => "EnumTypeDefinition",
            Self::EnumTypeExtension => "EnumTypeExtension",
            Self::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            Self::InputObjectTypeExtension => "InputObjectTypeExtension",
            Self::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            Self::InterfaceTypeExtension => "InterfaceTypeExtension",
            Self::ObjectTypeDefinition => "ObjectTypeDefinition",
            Self::ObjectTypeExtension => "ObjectTypeExtension",
            Self::OperationTypeDefinition => "OperationTypeDefinition",
            Self::ScalarTypeDefinition => "ScalarTypeDefinition",
            Self::ScalarTypeExtension => "ScalarTypeExtension",
            Self::UnionTypeDefinition => "UnionTypeDefinition",
            Self::UnionTypeExtension => "UnionTypeExtension",
        }
    }

    /// Whether a record of this kind can receive "implemented by" back-links.
    ///
    /// An interface extension only ever becomes a record when no base
    /// definition exists, in which case it stands in for the interface.
    pub fn is_interface(&self) -> bool {
        matches!(self, Self::InterfaceTypeDefinition | Self::InterfaceTypeExtension)
    }

    pub fn is_extension(&self) -> bool {
        matches!(
            self,
            Self::EnumTypeExtension
                | Self::InputObjectTypeExtension
                | Self::InterfaceTypeExtension
                | Self::ObjectTypeExtension
                | Self::ScalarTypeExtension
                | Self::UnionTypeExtension
        )
    }
}
impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
