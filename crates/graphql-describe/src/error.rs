use crate::file_reader::ReadContentError;
use crate::model::OperationKind;
use thiserror::Error;

/// Every way that describing a schema can fail.
///
/// The `Display` output of the structural variants is a stable,
/// user-facing message. Variants wrapping a collaborator failure (parsing,
/// merging, introspection decoding) carry that collaborator's own message.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaModelError {
    #[error("Must provide only one schema definition.")]
    DuplicateSchemaDefinition,

    #[error("Must provide only one {operation} type in schema.")]
    DuplicateOperationType {
        operation: OperationKind,
    },

    #[error("Type \"{type_name}\" was defined more than once.")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Unable to merge the `{type_name}` definitions of two schema fragments: {reason}")]
    FragmentMergeConflict {
        type_name: String,
        reason: String,
    },

    #[error("Error parsing schema fragment #{fragment_index}: {err}")]
    FragmentParseError {
        fragment_index: usize,
        err: String,
    },

    #[error("Failed to decode introspection result: {err}")]
    IntrospectionDecodeError {
        err: String,
    },

    #[error("Failed to build a schema from introspection result: {err}")]
    IntrospectionSchemaError {
        err: String,
    },

    #[error("Syntax Error: {message} (at byte {index})")]
    ParseError {
        index: usize,
        message: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(#[from] ReadContentError),

    #[error("Specified {operation} type \"{type_name}\" not found in document.")]
    UnresolvedOperationType {
        operation: OperationKind,
        type_name: String,
    },
}
