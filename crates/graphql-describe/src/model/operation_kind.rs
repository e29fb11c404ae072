use apollo_parser::cst;

/// One of the three root operation kinds a schema block can bind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    pub(crate) fn from_cst(operation_type: &cst::OperationType) -> Option<Self> {
        if operation_type.query_token().is_some() {
            Some(Self::Query)
        } else if operation_type.mutation_token().is_some() {
            Some(Self::Mutation)
        } else if operation_type.subscription_token().is_some() {
            Some(Self::Subscription)
        } else {
            None
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
