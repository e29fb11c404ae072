use crate::document::ClassifiedDocument;
use crate::model::OperationResolver;
use crate::model::SchemaDefinition;
use crate::model::TypeModelBuilder;
use crate::model::TypeRecord;
use crate::SchemaModelError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaModelError>;

const SCHEMA_DEFINITION_KEY: &str = "schemaDefinition";

/// The flat, name-keyed description of a whole schema.
///
/// Serializes as a single object with one key per type name, plus a
/// `schemaDefinition` key when the source declared a schema block. A type
/// that is itself named `schemaDefinition` takes that key, and the bindings
/// are then only reachable through [`SchemaModel::schema_definition`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemaModel {
    directive_names: Vec<String>,
    schema_definition: Option<SchemaDefinition>,
    types: IndexMap<String, TypeRecord>,
}
impl SchemaModel {
    pub(crate) fn from_sdl(sdl: &str) -> Result<Self> {
        let doc = ClassifiedDocument::classify(sdl)?;

        let mut builder = TypeModelBuilder::new();
        for (type_name, classified) in &doc.types {
            builder.visit_type(type_name, classified);
        }
        let types = builder.build();

        let schema_definition = match &doc.schema_def {
            Some(schema_def) => Some(OperationResolver::new(&types).resolve(schema_def)?),
            None => None,
        };

        Ok(Self {
            directive_names: doc.directive_names(),
            schema_definition,
            types,
        })
    }

    /// Names of the directive definitions found in the source, in document
    /// order.
    pub fn directive_names(&self) -> &[String] {
        self.directive_names.as_slice()
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeRecord> {
        self.types.get(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn schema_definition(&self) -> Option<&SchemaDefinition> {
        self.schema_definition.as_ref()
    }

    /// Every type record, in the order the types were first declared.
    pub fn types(&self) -> &IndexMap<String, TypeRecord> {
        &self.types
    }
}
impl serde::Serialize for SchemaModel {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        if let Some(schema_definition) = &self.schema_definition
            && !self.types.contains_key(SCHEMA_DEFINITION_KEY) {
            map.serialize_entry(SCHEMA_DEFINITION_KEY, schema_definition)?;
        }
        for (type_name, record) in &self.types {
            map.serialize_entry(type_name, record)?;
        }
        map.end()
    }
}

/// Look up a type record by name.
///
/// # Panics
///
/// Panics if no type named `type_name` exists; use [`SchemaModel::get`] for
/// a fallible lookup.
impl std::ops::Index<&str> for SchemaModel {
    type Output = TypeRecord;

    fn index(&self, type_name: &str) -> &Self::Output {
        &self.types[type_name]
    }
}
