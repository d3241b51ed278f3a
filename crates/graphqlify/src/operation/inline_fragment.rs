use crate::operation::DescriptorError;
use crate::operation::SelectionSet;
use crate::operation::selection_set_builder::validate_name;

type Result<T> = std::result::Result<T, DescriptorError>;

/// A type-conditioned selection embedded directly at its use site,
/// rendered as `... on TypeName { … }`.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: String,
}
impl InlineFragment {
    pub fn new(
        type_condition: impl Into<String>,
        selection_set: SelectionSet,
    ) -> Result<InlineFragment> {
        let type_condition = type_condition.into();
        validate_name(&type_condition)?;

        Ok(InlineFragment {
            selection_set,
            type_condition,
        })
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
