use crate::model::FieldRecord;
use crate::model::NodeKind;

/// The normalized description of a single named type.
///
/// Which lists are populated depends on the kind: `fields` for objects,
/// interfaces and input objects, `values` for enums and `union_members` for
/// unions. On an interface, `implemented_interfaces` holds both the
/// interfaces it declares and, after back-linking, every type that
/// implements it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRecord {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FieldRecord>,
    pub values: Vec<String>,
    pub union_members: Vec<String>,
    pub implemented_interfaces: Vec<String>,
}
impl TypeRecord {
    pub(crate) fn new(kind: NodeKind, description: Option<String>) -> Self {
        Self {
            kind,
            description,
            fields: vec![],
            values: vec![],
            union_members: vec![],
            implemented_interfaces: vec![],
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldRecord> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn implements(&self, name: &str) -> bool {
        self.implemented_interfaces.iter().any(|iface| iface == name)
    }
}
