use crate::document::FieldDefinitionNode;
use crate::document::text_of;
use crate::model::WrappedType;
use apollo_parser::cst;

const DEPRECATED_DIRECTIVE_NAME: &str = "deprecated";

/// A field of an object, interface, or input object type.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    pub name: String,
    #[serde(flatten)]
    pub wrapped_type: WrappedType,
    pub arguments: Vec<ArgumentRecord>,
    pub is_deprecated: bool,
}
impl FieldRecord {
    pub(crate) fn from_node(node: &FieldDefinitionNode) -> Self {
        match node {
            FieldDefinitionNode::Output(def) => Self {
                name: text_of(def.name()),
                wrapped_type: WrappedType::from_cst(def.ty()),
                arguments: def.arguments_definition()
                    .map(|args| {
                        args.input_value_definitions()
                            .map(|arg| ArgumentRecord::from_cst(&arg))
                            .collect()
                    })
                    .unwrap_or_default(),
                is_deprecated: is_deprecated(def.directives()),
            },

            // Input object fields never carry arguments.
            FieldDefinitionNode::Input(def) => Self {
                name: text_of(def.name()),
                wrapped_type: WrappedType::from_cst(def.ty()),
                arguments: vec![],
                is_deprecated: is_deprecated(def.directives()),
            },
        }
    }

    pub fn type_name(&self) -> &str {
        self.wrapped_type.type_name.as_str()
    }
}

/// An argument declared on a [`FieldRecord`].
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentRecord {
    pub name: String,
    #[serde(flatten)]
    pub wrapped_type: WrappedType,
    pub is_deprecated: bool,
}
impl ArgumentRecord {
    pub(crate) fn from_cst(def: &cst::InputValueDefinition) -> Self {
        Self {
            name: text_of(def.name()),
            wrapped_type: WrappedType::from_cst(def.ty()),
            is_deprecated: is_deprecated(def.directives()),
        }
    }
}

/// A member is deprecated iff one of its directives is literally named
/// `deprecated`. The deprecation reason is not extracted.
pub(crate) fn is_deprecated(directives: Option<cst::Directives>) -> bool {
    directives.is_some_and(|directives| {
        directives.directives()
            .any(|directive| text_of(directive.name()) == DEPRECATED_DIRECTIVE_NAME)
    })
}
