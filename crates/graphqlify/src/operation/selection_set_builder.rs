use crate::Value;
use crate::name;
use crate::operation::DescriptorError;
use crate::operation::Fragment;
use crate::operation::InlineFragment;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, DescriptorError>;

/// Builds a [`SelectionSet`], validating names as entries are added.
/// Adding an entry under an already-used key replaces the previous entry
/// while keeping its position.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSetBuilder {
    selections: IndexMap<String, Selection>,
}
impl SelectionSetBuilder {
    pub fn new() -> SelectionSetBuilder {
        SelectionSetBuilder {
            selections: IndexMap::new(),
        }
    }

    /// Add an aliased field after any previously added entries. Shorthand
    /// for [`Selection::aliased`] keyed by the display name.
    pub fn add_aliased_field(
        self,
        display_name: impl Into<String>,
        field_name: impl Into<String>,
        body: Selection,
    ) -> Result<Self> {
        let display_name = display_name.into();
        let field_name = field_name.into();
        self.add_field(
            display_name.to_owned(),
            Selection::aliased(display_name, field_name, body),
        )
    }

    /// Add a field entry after any previously added entries.
    pub fn add_field(
        mut self,
        key: impl Into<String>,
        selection: Selection,
    ) -> Result<Self> {
        let key = key.into();
        if !name::is_valid_name(&key) {
            return Err(DescriptorError::InvalidIdentifier { name: key });
        }
        validate_decoration_names(&selection)?;
        self.selections.insert(key, selection);
        Ok(self)
    }

    /// Add a spread of `fragment` after any previously added entries.
    ///
    /// Spreading the same fragment into several selection sets shares the
    /// one definition; it is rendered once, at the end of the document.
    pub fn add_fragment_spread(
        mut self,
        fragment: &Arc<Fragment>,
    ) -> Result<Self> {
        self.selections.insert(
            format!("...{}", fragment.name()),
            Selection::fragment_spread(fragment),
        );
        Ok(self)
    }

    /// Add a type-conditioned inline fragment after any previously added
    /// entries. Inline fragments coexist with plain field entries; a set
    /// consisting solely of inline fragments renders a union-style
    /// selection, one arm per type condition in insertion order.
    pub fn add_inline_fragment(
        mut self,
        inline_fragment: InlineFragment,
    ) -> Result<Self> {
        self.selections.insert(
            inline_fragment.type_condition().to_string(),
            Selection::InlineFragment(inline_fragment),
        );
        Ok(self)
    }

    /// Consume this builder to produce a [`SelectionSet`].
    pub fn build(self) -> Result<SelectionSet> {
        if self.selections.is_empty() {
            return Err(DescriptorError::EmptySelection);
        }

        Ok(SelectionSet {
            selections: self.selections,
        })
    }
}

/// Validates the names introduced by the decoration chain of a field
/// entry: alias names, argument names, and the identifier-shaped values
/// nested inside argument literals.
///
/// Object selections and fragment bodies are not re-validated here; their
/// own builders already checked them.
fn validate_decoration_names(selection: &Selection) -> Result<()> {
    match selection {
        Selection::Aliased {
            display_name,
            field_name,
            body,
        } => {
            validate_name(display_name)?;
            validate_name(field_name)?;
            validate_decoration_names(body)
        },

        Selection::Parameterized { arguments, body } => {
            for (arg_name, arg_value) in arguments {
                validate_name(arg_name)?;
                validate_value_names(arg_value)?;
            }
            validate_decoration_names(body)
        },

        Selection::List(element) => validate_decoration_names(element),

        Selection::Scalar(_)
            | Selection::Object(_)
            | Selection::FragmentSpread(_)
            | Selection::InlineFragment(_)
            => Ok(()),
    }
}

fn validate_value_names(value: &Value) -> Result<()> {
    match value {
        Value::EnumToken(token) => validate_name(token),
        Value::VarRef(var_name) => validate_name(var_name),

        Value::List(values) => {
            for value in values {
                validate_value_names(value)?;
            }
            Ok(())
        },

        Value::Object(entries) => {
            for (key, value) in entries {
                validate_name(key)?;
                validate_value_names(value)?;
            }
            Ok(())
        },

        Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Bool(_)
            | Value::Null
            => Ok(()),
    }
}

pub(super) fn validate_name(name: &str) -> Result<()> {
    if name::is_valid_name(name) {
        Ok(())
    } else {
        Err(DescriptorError::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}
