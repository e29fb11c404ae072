mod field_record;
mod interface_linker;
mod node_kind;
mod operation_kind;
mod operation_resolver;
mod schema_definition;
mod schema_model;
mod type_model_builder;
mod type_record;
mod wrapped_type;

pub use field_record::ArgumentRecord;
pub use field_record::FieldRecord;
pub use node_kind::NodeKind;
pub use operation_kind::OperationKind;
use operation_resolver::OperationResolver;
pub use schema_definition::OperationBinding;
pub use schema_definition::SchemaDefinition;
pub use schema_model::SchemaModel;
use type_model_builder::TypeModelBuilder;
pub use type_record::TypeRecord;
pub use wrapped_type::WrappedType;

#[cfg(test)]
mod tests;
