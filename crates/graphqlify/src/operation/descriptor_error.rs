use thiserror::Error;

/// Raised while constructing a descriptor. All descriptor validation
/// happens at construction time; rendering a successfully built
/// [`Operation`](crate::operation::Operation) cannot fail.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DescriptorError {
    #[error(
        "Found multiple distinct fragment definitions named \
        `{fragment_name}`"
    )]
    DuplicateFragmentName {
        fragment_name: String,
    },

    #[error("A selection set must select at least one field")]
    EmptySelection,

    #[error(
        "A fragment spreads itself, either directly or through the \
        fragments it spreads: {}",
        .fragment_names.join(" -> "),
    )]
    FragmentCycleDetected {
        fragment_names: Vec<String>,
    },

    #[error("`{name}` is not a valid GraphQL name")]
    InvalidIdentifier {
        name: String,
    },

    #[error(
        "An argument references the variable `${variable_name}`, but no \
        such variable is declared on the operation"
    )]
    UndeclaredVariable {
        variable_name: String,
    },
}
