use crate::Value;

/// Describes the response value a scalar field is expected to produce.
///
/// Scalar kinds exist for type-projection tooling layered on top of the
/// descriptor model; the document writer emits the field's key alone
/// regardless of kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarKind {
    Boolean,

    /// A field whose response value is fixed out-of-band (e.g. the
    /// discriminant field of a union member). The stored literal is never
    /// rendered into the document.
    Constant(Value),

    /// A caller-defined scalar, tagged with its type name.
    Custom(String),

    Enum {
        name: String,
        values: Vec<String>,
    },

    Number,

    /// No rendering effect; marks the wrapped kind as nullable for
    /// projection purposes.
    Optional(Box<ScalarKind>),

    String,
}
