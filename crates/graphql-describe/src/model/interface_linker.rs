use crate::model::TypeRecord;
use indexmap::IndexMap;

/// Append each implementing type's name to the `implemented_interfaces` of
/// every interface it declares.
///
/// Declarations are snapshotted before any record is touched, so back-links
/// added here are never themselves treated as declarations. References to
/// names that are missing or not interfaces are skipped.
pub(crate) fn link_implementations(records: &mut IndexMap<String, TypeRecord>) {
    let declarations: Vec<(usize, usize)> = records.values()
        .enumerate()
        .flat_map(|(implementor_idx, record)| {
            record.implemented_interfaces.iter()
                .filter_map(|iface_name| records.get_index_of(iface_name.as_str()))
                .map(move |iface_idx| (implementor_idx, iface_idx))
                .collect::<Vec<_>>()
        })
        .collect();

    for (implementor_idx, iface_idx) in declarations {
        let Some((implementor_name, _)) = records.get_index(implementor_idx) else {
            continue;
        };
        let implementor_name = implementor_name.to_owned();

        let Some((iface_name, iface)) = records.get_index_mut(iface_idx) else {
            continue;
        };
        if iface.kind.is_interface() {
            log::trace!("`{implementor_name}` implements interface `{iface_name}`.");
            iface.implemented_interfaces.push(implementor_name);
        } else {
            log::trace!(
                "`{implementor_name}` lists `{iface_name}` as an interface, but it is a \
                `{}`; no back-link added.",
                iface.kind,
            );
        }
    }
}
