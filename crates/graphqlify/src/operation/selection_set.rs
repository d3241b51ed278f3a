use crate::operation::Selection;
use indexmap::IndexMap;

/// An insertion-ordered set of selections on an object-shaped result.
/// Iteration order of the map is the emission order of the rendered
/// selection set.
///
/// Keys name plain fields. Aliased entries and fragment spreads carry
/// their own emitted names, so for those entries the key only determines
/// ordering (the builder derives it from the alias display name, the
/// fragment name, or the inline fragment's type condition).
///
/// Built via [`SelectionSetBuilder`](crate::operation::SelectionSetBuilder);
/// a selection set is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub(super) selections: IndexMap<String, Selection>,
}
impl SelectionSet {
    pub fn selections(&self) -> &IndexMap<String, Selection> {
        &self.selections
    }
}
