use crate::operation::DescriptorError;
use crate::operation::Fragment;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use crate::operation::selection_set_builder::validate_name;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, DescriptorError>;

/// Builds an [`Operation`].
///
/// [`OperationBuilder::build`] performs the whole-tree validation that
/// individual selection-set and fragment constructors cannot: fragment
/// name uniqueness across everything reachable from the root, absence of
/// spread cycles, and declaration of every referenced variable.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationBuilder {
    kind: OperationKind,
    name: Option<String>,
    selection_set: Option<SelectionSet>,
    variables: IndexMap<String, Variable>,
}
impl OperationBuilder {
    pub fn new(kind: OperationKind) -> OperationBuilder {
        OperationBuilder {
            kind,
            name: None,
            selection_set: None,
            variables: IndexMap::new(),
        }
    }

    pub fn mutation() -> OperationBuilder {
        Self::new(OperationKind::Mutation)
    }

    pub fn query() -> OperationBuilder {
        Self::new(OperationKind::Query)
    }

    pub fn subscription() -> OperationBuilder {
        Self::new(OperationKind::Subscription)
    }

    /// Declare a variable after any previously declared `Variable`s.
    /// `name` is the bare variable name; `type_annotation` is carried
    /// verbatim into the declaration clause. Re-declaring a name replaces
    /// the earlier declaration while keeping its position.
    pub fn add_variable(
        mut self,
        name: impl Into<String>,
        type_annotation: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        self.variables.insert(name.to_owned(), Variable {
            name,
            type_annotation: type_annotation.into(),
        });
        Ok(self)
    }

    /// Set the name of the [`Operation`]. Unnamed operations render as
    /// anonymous documents.
    pub fn set_name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        let _ = self.name.insert(name);
        Ok(self)
    }

    /// Set the root selection set of the [`Operation`].
    pub fn set_selection_set(
        mut self,
        selection_set: SelectionSet,
    ) -> Result<Self> {
        let _ = self.selection_set.insert(selection_set);
        Ok(self)
    }

    /// Consume this builder to produce a validated [`Operation`].
    pub fn build(self) -> Result<Operation> {
        let selection_set =
            self.selection_set.ok_or(DescriptorError::EmptySelection)?;

        let fragments = collect_fragments(&selection_set)?;
        validate_variable_refs(&selection_set, &fragments, &self.variables)?;

        log::debug!(
            "built `{}` operation selecting {} root field(s), reaching {} \
            fragment(s)",
            self.name.as_deref().unwrap_or("<anonymous>"),
            selection_set.selections().len(),
            fragments.len(),
        );

        Ok(Operation {
            kind: self.kind,
            name: self.name,
            selection_set,
            variables: self.variables,
        })
    }
}

/// Collect every fragment reachable from `selection_set`, depth-first and
/// left-to-right, keyed by name in first-encounter order (which is also
/// the order the document writer emits definitions in).
///
/// Two spread sites may share one definition; a name collision between
/// distinct definitions is an error. The descent stack guards against a
/// fragment reaching itself through the fragments it spreads.
fn collect_fragments(
    selection_set: &SelectionSet,
) -> Result<IndexMap<String, Arc<Fragment>>> {
    let mut fragments = IndexMap::new();
    let mut descent_stack = vec![];
    collect_from_set(selection_set, &mut fragments, &mut descent_stack)?;
    Ok(fragments)
}

fn collect_from_set(
    selection_set: &SelectionSet,
    fragments: &mut IndexMap<String, Arc<Fragment>>,
    descent_stack: &mut Vec<String>,
) -> Result<()> {
    for selection in selection_set.selections().values() {
        collect_from_selection(selection, fragments, descent_stack)?;
    }
    Ok(())
}

fn collect_from_selection(
    selection: &Selection,
    fragments: &mut IndexMap<String, Arc<Fragment>>,
    descent_stack: &mut Vec<String>,
) -> Result<()> {
    match selection {
        Selection::Scalar(_) => Ok(()),

        Selection::Object(selection_set) =>
            collect_from_set(selection_set, fragments, descent_stack),

        Selection::List(body)
            | Selection::Aliased { body, .. }
            | Selection::Parameterized { body, .. }
            => collect_from_selection(body, fragments, descent_stack),

        Selection::InlineFragment(inline_fragment) => collect_from_set(
            inline_fragment.selection_set(),
            fragments,
            descent_stack,
        ),

        Selection::FragmentSpread(fragment) => {
            let fragment_name = fragment.name();

            if let Some(cycle_start) = descent_stack
                .iter()
                .position(|name| name == fragment_name)
            {
                let mut fragment_names =
                    descent_stack[cycle_start..].to_vec();
                fragment_names.push(fragment_name.to_string());
                return Err(DescriptorError::FragmentCycleDetected {
                    fragment_names,
                });
            }

            match fragments.get(fragment_name) {
                // Re-encountering the same definition is reuse; its body
                // was already scanned on first encounter.
                Some(known) if known.as_ref() == fragment.as_ref() => Ok(()),

                Some(_) => Err(DescriptorError::DuplicateFragmentName {
                    fragment_name: fragment_name.to_string(),
                }),

                None => {
                    fragments.insert(
                        fragment_name.to_string(),
                        Arc::clone(fragment),
                    );
                    descent_stack.push(fragment_name.to_string());
                    collect_from_set(
                        fragment.selection_set(),
                        fragments,
                        descent_stack,
                    )?;
                    descent_stack.pop();
                    Ok(())
                },
            }
        },
    }
}

/// Every variable referenced by an argument value — in the root selection
/// set or in any reachable fragment body — must be declared on the
/// operation.
fn validate_variable_refs(
    selection_set: &SelectionSet,
    fragments: &IndexMap<String, Arc<Fragment>>,
    variables: &IndexMap<String, Variable>,
) -> Result<()> {
    let mut referenced = vec![];
    {
        let mut record = |var_name: &str| {
            referenced.push(var_name.to_string());
        };

        for_each_argument_value(selection_set, &mut |value| {
            value.for_each_var_ref(&mut record);
        });
        for fragment in fragments.values() {
            for_each_argument_value(fragment.selection_set(), &mut |value| {
                value.for_each_var_ref(&mut record);
            });
        }
    }

    for var_name in referenced {
        if !variables.contains_key(var_name.as_str()) {
            return Err(DescriptorError::UndeclaredVariable {
                variable_name: var_name,
            });
        }
    }
    Ok(())
}

/// Invoke `visit` with every argument value in `selection_set`, without
/// descending into fragment spreads (fragment bodies are walked
/// separately, once each).
fn for_each_argument_value(
    selection_set: &SelectionSet,
    visit: &mut dyn FnMut(&crate::Value),
) {
    for selection in selection_set.selections().values() {
        for_each_argument_value_in(selection, visit);
    }
}

fn for_each_argument_value_in(
    selection: &Selection,
    visit: &mut dyn FnMut(&crate::Value),
) {
    match selection {
        Selection::Scalar(_) | Selection::FragmentSpread(_) => (),

        Selection::Object(selection_set) =>
            for_each_argument_value(selection_set, visit),

        Selection::List(body) | Selection::Aliased { body, .. } =>
            for_each_argument_value_in(body, visit),

        Selection::Parameterized { arguments, body } => {
            for value in arguments.values() {
                visit(value);
            }
            for_each_argument_value_in(body, visit);
        },

        Selection::InlineFragment(inline_fragment) =>
            for_each_argument_value(inline_fragment.selection_set(), visit),
    }
}
