use crate::document::text_of;
use crate::model::OperationBinding;
use crate::model::OperationKind;
use crate::model::SchemaDefinition;
use crate::model::TypeRecord;
use crate::SchemaModelError;
use apollo_parser::cst;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaModelError>;

/// Resolves the root operation entries of a `schema { ... }` block against
/// the built type map.
pub(crate) struct OperationResolver<'a> {
    types: &'a IndexMap<String, TypeRecord>,
}
impl<'a> OperationResolver<'a> {
    pub(crate) fn new(types: &'a IndexMap<String, TypeRecord>) -> Self {
        Self { types }
    }

    pub(crate) fn resolve(
        &self,
        schema_def: &cst::SchemaDefinition,
    ) -> Result<SchemaDefinition> {
        let mut resolved = SchemaDefinition::default();
        for root_op in schema_def.root_operation_type_definitions() {
            let Some(operation) = root_op.operation_type()
                .as_ref()
                .and_then(OperationKind::from_cst) else {
                log::trace!("Skipping root operation entry with no operation type.");
                continue;
            };
            let type_name = text_of(root_op.named_type().and_then(|named| named.name()));

            let slot = resolved.slot_mut(operation);
            if slot.is_some() {
                return Err(SchemaModelError::DuplicateOperationType { operation });
            }
            if !self.types.contains_key(type_name.as_str()) {
                return Err(SchemaModelError::UnresolvedOperationType {
                    operation,
                    type_name,
                });
            }

            log::trace!("Bound `{operation}` operation to `{type_name}`.");
            *slot = Some(OperationBinding::new(operation, type_name));
        }
        Ok(resolved)
    }
}
