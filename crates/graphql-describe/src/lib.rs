pub mod ast;
mod document;
mod error;
mod file_reader;
pub mod model;
mod source;

pub use error::SchemaModelError;
pub use file_reader::ReadContentError;
pub use model::SchemaModel;
pub use source::SchemaSource;

/// Describe a GraphQL schema as a flat, name-keyed [`SchemaModel`].
///
/// `source` may be anything convertible into a [`SchemaSource`]: raw SDL, a
/// list of SDL fragments to merge, a parsed `graphql_parser` document, a
/// built `cynic_introspection` schema, or an introspection JSON payload
/// (optionally wrapped in a `{ "data": ... }` envelope).
///
/// The first structural violation aborts the whole call; no partial model is
/// ever returned.
pub fn describe_schema(
    source: impl Into<SchemaSource>,
) -> Result<SchemaModel, SchemaModelError> {
    let sdl = source.into().into_sdl()?;
    SchemaModel::from_sdl(sdl.as_str())
}
