//! Owned `graphql_parser` schema AST types used for SDL fragment merging and
//! for the parsed-document [`SchemaSource`](crate::SchemaSource) shape.

pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;

    /// Parse SDL text into an owned [`Document`].
    pub fn parse(sdl: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::schema::parse_schema::<String>(sdl)?.into_static())
    }
}
