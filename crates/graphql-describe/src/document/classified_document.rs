use crate::document::DefinitionNode;
use crate::document::normalize_legacy_implements;
use crate::document::TypeDefinitionNode;
use crate::document::text_of;
use crate::SchemaModelError;
use apollo_parser::cst;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaModelError>;

/// A named type's primary node plus every extension that targeted it, in
/// document order.
#[derive(Clone, Debug)]
pub(crate) struct ClassifiedType {
    pub(crate) primary: TypeDefinitionNode,
    pub(crate) extensions: Vec<TypeDefinitionNode>,
}
impl ClassifiedType {
    /// The primary node followed by its extensions.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = &TypeDefinitionNode> {
        std::iter::once(&self.primary).chain(self.extensions.iter())
    }
}

/// The top-level definitions of one SDL document, partitioned by role.
#[derive(Debug)]
pub(crate) struct ClassifiedDocument {
    pub(crate) directive_defs: Vec<cst::DirectiveDefinition>,
    pub(crate) schema_def: Option<cst::SchemaDefinition>,
    pub(crate) types: IndexMap<String, ClassifiedType>,
}
impl ClassifiedDocument {
    /// Syntax error offsets refer to the text after legacy `implements`
    /// clauses have been given `&` separators.
    pub(crate) fn classify(sdl: &str) -> Result<Self> {
        let sdl = normalize_legacy_implements(sdl);
        let tree = apollo_parser::Parser::new(&sdl).parse();
        if let Some(err) = tree.errors().next() {
            return Err(SchemaModelError::ParseError {
                index: err.index(),
                message: err.message().to_string(),
            });
        }

        let mut classified = Self {
            directive_defs: vec![],
            schema_def: None,
            types: IndexMap::new(),
        };
        for def in tree.document().definitions() {
            classified.visit_def(DefinitionNode::from(def))?;
        }

        log::debug!(
            "Classified {} type(s) and {} directive definition(s) (schema block: {}).",
            classified.types.len(),
            classified.directive_defs.len(),
            classified.schema_def.is_some(),
        );
        Ok(classified)
    }

    pub(crate) fn directive_names(&self) -> Vec<String> {
        self.directive_defs.iter()
            .map(|def| text_of(def.name()))
            .collect()
    }

    fn visit_def(&mut self, def: DefinitionNode) -> Result<()> {
        match def {
            DefinitionNode::Schema(schema_def) => {
                if self.schema_def.is_some() {
                    return Err(SchemaModelError::DuplicateSchemaDefinition);
                }
                self.schema_def = Some(schema_def);
            },

            DefinitionNode::Type(type_def) => {
                let type_name = type_def.name();
                if self.types.contains_key(type_name.as_str()) {
                    return Err(SchemaModelError::DuplicateTypeDefinition {
                        type_name,
                    });
                }
                self.types.insert(type_name, ClassifiedType {
                    primary: type_def,
                    extensions: vec![],
                });
            },

            DefinitionNode::TypeExtension(type_ext) => {
                let type_name = type_ext.name();
                if let Some(base) = self.types.get_mut(type_name.as_str()) {
                    log::trace!("Merging `{}` into existing `{type_name}`.", type_ext.kind());
                    base.extensions.push(type_ext);
                } else {
                    // No base (yet): the extension stands in as the primary
                    // declaration for this name.
                    log::trace!(
                        "`{}` of undeclared type `{type_name}` registered as its primary \
                        declaration.",
                        type_ext.kind(),
                    );
                    self.types.insert(type_name, ClassifiedType {
                        primary: type_ext,
                        extensions: vec![],
                    });
                }
            },

            DefinitionNode::Directive(directive_def) =>
                self.directive_defs.push(directive_def),

            DefinitionNode::Other(description) =>
                log::trace!("Ignoring {description}."),
        }

        Ok(())
    }
}
