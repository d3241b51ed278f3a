mod descriptor_error;
mod document_writer;
mod fragment;
mod fragment_registry;
mod inline_fragment;
mod operation;
mod operation_builder;
mod operation_kind;
mod scalar_kind;
mod selection;
mod selection_set;
mod selection_set_builder;
mod variable;

pub use descriptor_error::DescriptorError;
pub(crate) use document_writer::DocumentWriter;
pub use fragment::Fragment;
pub(crate) use fragment_registry::FragmentRegistry;
pub use inline_fragment::InlineFragment;
pub use operation::Operation;
pub use operation_builder::OperationBuilder;
pub use operation_kind::OperationKind;
pub use scalar_kind::ScalarKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use selection_set_builder::SelectionSetBuilder;
pub use variable::Variable;

#[cfg(test)]
mod tests;
