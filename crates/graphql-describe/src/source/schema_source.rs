use crate::ast;
use crate::file_reader;
use crate::source::fragment_merger;
use crate::SchemaModelError;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaModelError>;

/// Every input shape a schema can be described from.
///
/// The shape is decided once, at the boundary; [`SchemaSource::into_sdl`]
/// then reduces any shape to a single SDL string.
#[derive(Debug)]
pub enum SchemaSource {
    /// A parsed `graphql_parser` schema document.
    Document(ast::schema::Document),

    /// SDL fragments to merge, with same-named types combined.
    Fragments(Vec<String>),

    /// An introspection result, optionally wrapped in a `{ "data": ... }`
    /// envelope.
    Introspection(serde_json::Value),

    /// A fully built client schema.
    Schema(cynic_introspection::Schema),

    /// Raw SDL text.
    Sdl(String),
}
impl SchemaSource {
    /// Load a source from files on disk.
    ///
    /// A lone `.json` file is read as an introspection result. Otherwise each
    /// file is one SDL fragment.
    pub fn from_files(file_paths: &[impl AsRef<Path>]) -> Result<Self> {
        if let [file_path] = file_paths
            && file_path.as_ref().extension().is_some_and(|ext| ext == "json") {
            let content = file_reader::read_schema_file(file_path)?;
            let payload = serde_json::from_str(content.as_str())
                .map_err(|err| SchemaModelError::IntrospectionDecodeError {
                    err: err.to_string(),
                })?;
            return Ok(Self::Introspection(payload));
        }

        let mut fragments = vec![];
        for file_path in file_paths {
            log::trace!("Reading schema fragment from {:?}.", file_path.as_ref());
            fragments.push(file_reader::read_schema_file(file_path)?);
        }

        Ok(match fragments.len() {
            1 => Self::Sdl(fragments.remove(0)),
            _ => Self::Fragments(fragments),
        })
    }

    /// Reduce this source to SDL text.
    pub fn into_sdl(self) -> Result<String> {
        log::debug!("Normalizing schema source ({}) to SDL.", self.shape_name());
        match self {
            Self::Document(doc) => Ok(doc.to_string()),
            Self::Fragments(fragments) => fragment_merger::merge_fragments(&fragments),
            Self::Introspection(payload) => introspection_to_sdl(payload),
            Self::Schema(schema) => Ok(schema.to_sdl()),
            Self::Sdl(sdl) => Ok(sdl),
        }
    }

    fn shape_name(&self) -> &'static str {
        match self {
            Self::Document(_) => "parsed document",
            Self::Fragments(_) => "SDL fragments",
            Self::Introspection(_) => "introspection result",
            Self::Schema(_) => "built schema",
            Self::Sdl(_) => "SDL text",
        }
    }
}

fn introspection_to_sdl(payload: serde_json::Value) -> Result<String> {
    let payload = match payload {
        serde_json::Value::Object(mut envelope) => match envelope.remove("data") {
            Some(data) if !data.is_null() => data,
            _ => serde_json::Value::Object(envelope),
        },
        other => other,
    };

    let query: cynic_introspection::IntrospectionQuery = serde_json::from_value(payload)
        .map_err(|err| SchemaModelError::IntrospectionDecodeError {
            err: err.to_string(),
        })?;
    let schema = query.into_schema()
        .map_err(|err| SchemaModelError::IntrospectionSchemaError {
            err: err.to_string(),
        })?;
    Ok(schema.to_sdl())
}

impl std::convert::From<&str> for SchemaSource {
    fn from(value: &str) -> Self {
        Self::Sdl(value.to_string())
    }
}
impl std::convert::From<String> for SchemaSource {
    fn from(value: String) -> Self {
        Self::Sdl(value)
    }
}
impl std::convert::From<Vec<String>> for SchemaSource {
    fn from(value: Vec<String>) -> Self {
        Self::Fragments(value)
    }
}
impl std::convert::From<Vec<&str>> for SchemaSource {
    fn from(value: Vec<&str>) -> Self {
        Self::Fragments(value.into_iter().map(str::to_string).collect())
    }
}
impl std::convert::From<ast::schema::Document> for SchemaSource {
    fn from(value: ast::schema::Document) -> Self {
        Self::Document(value)
    }
}
impl std::convert::From<serde_json::Value> for SchemaSource {
    fn from(value: serde_json::Value) -> Self {
        Self::Introspection(value)
    }
}
impl std::convert::From<cynic_introspection::Schema> for SchemaSource {
    fn from(value: cynic_introspection::Schema) -> Self {
        Self::Schema(value)
    }
}
