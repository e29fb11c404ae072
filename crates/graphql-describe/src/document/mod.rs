mod classified_document;
mod definition_node;
mod legacy_implements;
mod type_definition_node;

pub(crate) use classified_document::ClassifiedDocument;
pub(crate) use classified_document::ClassifiedType;
use definition_node::DefinitionNode;
pub(crate) use legacy_implements::normalize_legacy_implements;
pub(crate) use type_definition_node::FieldDefinitionNode;
pub(crate) use type_definition_node::TypeDefinitionNode;
pub(crate) use type_definition_node::text_of;

#[cfg(test)]
mod tests;
