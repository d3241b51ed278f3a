/// The three kinds of executable operation a GraphQL document can declare.
#[derive(Clone, Debug, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The keyword that opens an operation document of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Mutation => "mutation",
            OperationKind::Query => "query",
            OperationKind::Subscription => "subscription",
        }
    }
}
