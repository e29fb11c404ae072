use crate::model::NodeKind;
use crate::model::OperationKind;

/// The root operation bindings declared by a `schema { ... }` block.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct SchemaDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<OperationBinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutation: Option<OperationBinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<OperationBinding>,
}
impl SchemaDefinition {
    pub fn get(&self, operation: OperationKind) -> Option<&OperationBinding> {
        self.slot(operation).as_ref()
    }

    pub(crate) fn slot_mut(
        &mut self,
        operation: OperationKind,
    ) -> &mut Option<OperationBinding> {
        match operation {
            OperationKind::Mutation => &mut self.mutation,
            OperationKind::Query => &mut self.query,
            OperationKind::Subscription => &mut self.subscription,
        }
    }

    fn slot(&self, operation: OperationKind) -> &Option<OperationBinding> {
        match operation {
            OperationKind::Mutation => &self.mutation,
            OperationKind::Query => &self.query,
            OperationKind::Subscription => &self.subscription,
        }
    }
}

/// Binds one [`OperationKind`] to the name of its root type.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct OperationBinding {
    /// Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub operation: OperationKind,
    /// Name of the root type.
    pub field: String,
}
impl OperationBinding {
    pub(crate) fn new(operation: OperationKind, type_name: String) -> Self {
        Self {
            kind: NodeKind::OperationTypeDefinition,
            operation,
            field: type_name,
        }
    }
}
