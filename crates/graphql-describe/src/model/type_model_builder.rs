use crate::document::ClassifiedType;
use crate::model::FieldRecord;
use crate::model::TypeRecord;
use crate::model::interface_linker;
use indexmap::IndexMap;

/// Builds one [`TypeRecord`] per classified type.
///
/// Dispatch is on the structural shape of the primary node: a node with a
/// field list yields `fields`, an enum yields `values` and a union yields
/// `union_members`. Content of the same shape contributed by extensions is
/// appended after the primary node's own content.
#[derive(Debug, Default)]
pub(crate) struct TypeModelBuilder {
    records: IndexMap<String, TypeRecord>,
}
impl TypeModelBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Build all records, then back-link interfaces to their implementors.
    pub(crate) fn build(mut self) -> IndexMap<String, TypeRecord> {
        log::debug!("Built {} type record(s).", self.records.len());
        interface_linker::link_implementations(&mut self.records);
        self.records
    }

    pub(crate) fn visit_type(&mut self, type_name: &str, classified: &ClassifiedType) {
        let primary = &classified.primary;
        let mut record = TypeRecord::new(primary.kind(), primary.description());

        if primary.fields().is_some() {
            record.fields = classified.nodes()
                .filter_map(|node| node.fields())
                .flatten()
                .map(|field| FieldRecord::from_node(&field))
                .collect();
        } else if primary.enum_values().is_some() {
            record.values = classified.nodes()
                .filter_map(|node| node.enum_values())
                .flatten()
                .collect();
        } else if primary.union_members().is_some() {
            record.union_members = classified.nodes()
                .filter_map(|node| node.union_members())
                .flatten()
                .collect();
        }

        record.implemented_interfaces = classified.nodes()
            .flat_map(|node| node.interfaces())
            .collect();

        if !classified.extensions.is_empty() {
            log::trace!(
                "Folded {} extension(s) into `{type_name}`.",
                classified.extensions.len(),
            );
        }
        self.records.insert(type_name.to_string(), record);
    }
}
