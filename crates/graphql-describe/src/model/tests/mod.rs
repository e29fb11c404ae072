mod interface_linker_tests;
mod schema_model_serialization_tests;
