use crate::Value;
use crate::operation::Fragment;
use crate::operation::InlineFragment;
use crate::operation::ScalarKind;
use crate::operation::SelectionSet;
use indexmap::IndexMap;
use std::sync::Arc;

/// One node of a descriptor tree.
///
/// The document writer dispatches on the variant tag, so adding a variant
/// surfaces every unhandled rendering path at compile time. `List`,
/// `Parameterized`, and `Aliased` decorate an inner node; a single field
/// may stack all three.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    /// `display_name: field_name` in the rendered document. The decorated
    /// body renders exactly as it would undecorated.
    Aliased {
        display_name: String,
        field_name: String,
        body: Box<Selection>,
    },

    /// A by-reference use of a shared [`Fragment`]; rendered as
    /// `...name` at the use site, with the definition hoisted to the end
    /// of the document.
    FragmentSpread(Arc<Fragment>),

    InlineFragment(InlineFragment),

    /// Marks the response value as a list of the element selection.
    /// Structurally transparent: renders byte-identically to the element.
    List(Box<Selection>),

    Object(SelectionSet),

    /// Decorates a field with a call-style argument list, rendered in
    /// insertion order.
    Parameterized {
        arguments: IndexMap<String, Value>,
        body: Box<Selection>,
    },

    /// A terminal field; only its key is rendered.
    Scalar(ScalarKind),
}
impl Selection {
    pub fn aliased(
        display_name: impl Into<String>,
        field_name: impl Into<String>,
        body: Selection,
    ) -> Selection {
        Selection::Aliased {
            display_name: display_name.into(),
            field_name: field_name.into(),
            body: Box::new(body),
        }
    }

    pub fn boolean() -> Selection {
        Selection::Scalar(ScalarKind::Boolean)
    }

    pub fn constant(value: Value) -> Selection {
        Selection::Scalar(ScalarKind::Constant(value))
    }

    pub fn custom(type_name: impl Into<String>) -> Selection {
        Selection::Scalar(ScalarKind::Custom(type_name.into()))
    }

    pub fn enumeration(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Selection {
        Selection::Scalar(ScalarKind::Enum {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    pub fn fragment_spread(fragment: &Arc<Fragment>) -> Selection {
        Selection::FragmentSpread(Arc::clone(fragment))
    }

    pub fn inline_fragment(inline_fragment: InlineFragment) -> Selection {
        Selection::InlineFragment(inline_fragment)
    }

    pub fn list(element: Selection) -> Selection {
        Selection::List(Box::new(element))
    }

    pub fn number() -> Selection {
        Selection::Scalar(ScalarKind::Number)
    }

    pub fn object(selection_set: SelectionSet) -> Selection {
        Selection::Object(selection_set)
    }

    pub fn optional(kind: ScalarKind) -> Selection {
        Selection::Scalar(ScalarKind::Optional(Box::new(kind)))
    }

    pub fn parameterized(
        arguments: IndexMap<String, Value>,
        body: Selection,
    ) -> Selection {
        Selection::Parameterized {
            arguments,
            body: Box::new(body),
        }
    }

    pub fn string() -> Selection {
        Selection::Scalar(ScalarKind::String)
    }
}
