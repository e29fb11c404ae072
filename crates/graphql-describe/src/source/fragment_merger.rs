use crate::ast;
use crate::document::normalize_legacy_implements;
use crate::SchemaModelError;
use std::collections::HashMap;
use std::collections::HashSet;
use std::hash::Hash;

type Result<T> = std::result::Result<T, SchemaModelError>;

/// Merge SDL fragments into a single SDL document, combining every type
/// declared in more than one fragment.
///
/// Members of same-named types (fields, interfaces, enum values, union
/// members) are unioned by name in first-seen order; the first declaration
/// of a member wins. Schema blocks are combined into one and directive
/// definitions are de-duplicated by name. Type extensions pass through
/// untouched.
pub(crate) fn merge_fragments<S: AsRef<str>>(fragments: &[S]) -> Result<String> {
    if let [fragment] = fragments {
        return Ok(fragment.as_ref().to_string());
    }

    let mut merger = FragmentMerger::default();
    for (fragment_index, fragment) in fragments.iter().enumerate() {
        let doc = ast::schema::parse(&normalize_legacy_implements(fragment.as_ref()))
            .map_err(|err| SchemaModelError::FragmentParseError {
                fragment_index,
                err: err.to_string(),
            })?;
        for def in doc.definitions {
            merger.visit_def(def)?;
        }
    }

    log::debug!(
        "Merged {} schema fragments into {} definitions.",
        fragments.len(),
        merger.definitions.len(),
    );
    Ok(merger.into_document().to_string())
}

#[derive(Debug, Default)]
struct FragmentMerger {
    definitions: Vec<ast::schema::Definition>,
    directive_names: HashSet<String>,
    schema_def_idx: Option<usize>,
    type_def_indices: HashMap<String, usize>,
}
impl FragmentMerger {
    fn into_document(self) -> ast::schema::Document {
        ast::schema::Document {
            definitions: self.definitions,
        }
    }

    fn visit_def(&mut self, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) => {
                if let Some(idx) = self.schema_def_idx
                    && let Definition::SchemaDefinition(existing) = &mut self.definitions[idx] {
                    return merge_schema_defs(existing, schema_def);
                }
                self.schema_def_idx = Some(self.definitions.len());
                self.definitions.push(Definition::SchemaDefinition(schema_def));
            },

            Definition::TypeDefinition(type_def) => {
                let type_name = type_def_name(&type_def).to_string();
                if let Some(&idx) = self.type_def_indices.get(type_name.as_str())
                    && let Definition::TypeDefinition(existing) = &mut self.definitions[idx] {
                    log::trace!("Combining fragment definitions of `{type_name}`.");
                    return merge_type_defs(existing, type_def);
                }
                self.type_def_indices.insert(type_name, self.definitions.len());
                self.definitions.push(Definition::TypeDefinition(type_def));
            },

            Definition::DirectiveDefinition(directive_def) => {
                if self.directive_names.insert(directive_def.name.to_owned()) {
                    self.definitions.push(Definition::DirectiveDefinition(directive_def));
                }
            },

            Definition::TypeExtension(_) => self.definitions.push(def),
        }
        Ok(())
    }
}

fn merge_schema_defs(
    existing: &mut ast::schema::SchemaDefinition,
    incoming: ast::schema::SchemaDefinition,
) -> Result<()> {
    merge_root_operation("query", &mut existing.query, incoming.query)?;
    merge_root_operation("mutation", &mut existing.mutation, incoming.mutation)?;
    merge_root_operation("subscription", &mut existing.subscription, incoming.subscription)?;
    union_by_key(&mut existing.directives, incoming.directives, |d| d.name.to_owned());
    Ok(())
}

fn merge_root_operation(
    operation: &str,
    existing: &mut Option<String>,
    incoming: Option<String>,
) -> Result<()> {
    let Some(incoming_name) = incoming else {
        return Ok(());
    };

    if let Some(existing_name) = existing.as_deref()
        && existing_name != incoming_name {
        return Err(SchemaModelError::FragmentMergeConflict {
            type_name: "schema".to_string(),
            reason: format!(
                "the `{operation}` operation is bound to both `{existing_name}` and \
                `{incoming_name}`",
            ),
        });
    }

    if existing.is_none() {
        *existing = Some(incoming_name);
    }
    Ok(())
}

fn merge_type_defs(
    existing: &mut ast::schema::TypeDefinition,
    incoming: ast::schema::TypeDefinition,
) -> Result<()> {
    use ast::schema::TypeDefinition;
    match (existing, incoming) {
        (TypeDefinition::Enum(existing), TypeDefinition::Enum(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            union_by_key(&mut existing.directives, incoming.directives, |d| d.name.to_owned());
            union_by_key(&mut existing.values, incoming.values, |v| v.name.to_owned());
        },

        (TypeDefinition::InputObject(existing), TypeDefinition::InputObject(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            union_by_key(&mut existing.directives, incoming.directives, |d| d.name.to_owned());
            union_by_key(&mut existing.fields, incoming.fields, |f| f.name.to_owned());
        },

        (TypeDefinition::Interface(existing), TypeDefinition::Interface(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            union_by_key(&mut existing.directives, incoming.directives, |d| d.name.to_owned());
            union_by_key(
                &mut existing.implements_interfaces,
                incoming.implements_interfaces,
                |name| name.clone(),
            );
            union_by_key(&mut existing.fields, incoming.fields, |f| f.name.to_owned());
        },

        (TypeDefinition::Object(existing), TypeDefinition::Object(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            union_by_key(&mut existing.directives, incoming.directives, |d| d.name.to_owned());
            union_by_key(
                &mut existing.implements_interfaces,
                incoming.implements_interfaces,
                |name| name.clone(),
            );
            union_by_key(&mut existing.fields, incoming.fields, |f| f.name.to_owned());
        },

        (TypeDefinition::Scalar(existing), TypeDefinition::Scalar(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            union_by_key(&mut existing.directives, incoming.directives, |d| d.name.to_owned());
        },

        (TypeDefinition::Union(existing), TypeDefinition::Union(incoming)) => {
            merge_description(&mut existing.description, incoming.description);
            union_by_key(&mut existing.directives, incoming.directives, |d| d.name.to_owned());
            union_by_key(&mut existing.types, incoming.types, |name| name.clone());
        },

        (existing, incoming) => return Err(SchemaModelError::FragmentMergeConflict {
            type_name: type_def_name(existing).to_string(),
            reason: format!(
                "declared as both {} and {}",
                type_def_kind(existing),
                type_def_kind(&incoming),
            ),
        }),
    }
    Ok(())
}

fn merge_description(existing: &mut Option<String>, incoming: Option<String>) {
    if existing.is_none() {
        *existing = incoming;
    }
}

fn union_by_key<V, K: Eq + Hash>(
    existing: &mut Vec<V>,
    incoming: Vec<V>,
    key: impl Fn(&V) -> K,
) {
    let mut seen: HashSet<K> = existing.iter().map(&key).collect();
    existing.extend(incoming.into_iter().filter(|value| seen.insert(key(value))));
}

fn type_def_kind(type_def: &ast::schema::TypeDefinition) -> &'static str {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(_) => "an enum",
        TypeDefinition::InputObject(_) => "an input object",
        TypeDefinition::Interface(_) => "an interface",
        TypeDefinition::Object(_) => "an object",
        TypeDefinition::Scalar(_) => "a scalar",
        TypeDefinition::Union(_) => "a union",
    }
}

fn type_def_name(type_def: &ast::schema::TypeDefinition) -> &str {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(t) => t.name.as_str(),
        TypeDefinition::InputObject(t) => t.name.as_str(),
        TypeDefinition::Interface(t) => t.name.as_str(),
        TypeDefinition::Object(t) => t.name.as_str(),
        TypeDefinition::Scalar(t) => t.name.as_str(),
        TypeDefinition::Union(t) => t.name.as_str(),
    }
}
