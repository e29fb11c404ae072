mod fragment_merger;
mod schema_source;

pub use schema_source::SchemaSource;

#[cfg(test)]
mod tests;
