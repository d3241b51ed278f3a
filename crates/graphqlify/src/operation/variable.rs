/// An operation-level variable declaration: a named, typed placeholder
/// that argument values reference via [`Value::VarRef`](crate::Value).
///
/// `name` is the bare variable name; `type_annotation` is the declared
/// GraphQL type as written in the document (e.g. `String!`, `[Int!]`).
/// The type string is carried verbatim — this library never checks it
/// against a schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(super) name: String,
    pub(super) type_annotation: String,
}
impl Variable {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }
}
