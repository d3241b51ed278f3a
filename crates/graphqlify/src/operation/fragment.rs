use crate::operation::DescriptorError;
use crate::operation::SelectionSet;
use crate::operation::selection_set_builder::validate_name;

type Result<T> = std::result::Result<T, DescriptorError>;

/// A named, reusable selection set, rendered once per document as
/// `fragment name on TypeCondition { … }`.
///
/// A fragment is created once and referenced from any number of spread
/// sites — including inside other fragments — via
/// [`Selection::fragment_spread`](crate::operation::Selection). Identity
/// is by name: every spread of the name refers to this one definition,
/// and two distinct definitions sharing a name are rejected when the
/// enclosing operation is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: String,
}
impl Fragment {
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
        selection_set: SelectionSet,
    ) -> Result<Fragment> {
        let name = name.into();
        let type_condition = type_condition.into();
        validate_name(&name)?;
        validate_name(&type_condition)?;

        Ok(Fragment {
            name,
            selection_set,
            type_condition,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
