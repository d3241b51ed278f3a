use crate::operation::DocumentWriter;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use indexmap::IndexMap;
use std::fmt;

/// A fully validated operation descriptor: kind, optional name, variable
/// declarations, and the root selection set.
///
/// Built via [`OperationBuilder`](crate::operation::OperationBuilder);
/// once built it is immutable and can be rendered any number of times
/// (and from any number of threads) with [`Operation::to_document`].
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(super) kind: OperationKind,
    pub(super) name: Option<String>,
    pub(super) selection_set: SelectionSet,
    pub(super) variables: IndexMap<String, Variable>,
}
impl Operation {
    pub fn kind(&self) -> &OperationKind {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }

    /// Render this operation as GraphQL document text: the operation
    /// header, the root selection set, and the definition of every
    /// fragment reachable from it, each rendered exactly once.
    ///
    /// Rendering is deterministic and infallible.
    pub fn to_document(&self) -> String {
        DocumentWriter::new().write_operation(self)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_document().as_str())
    }
}
