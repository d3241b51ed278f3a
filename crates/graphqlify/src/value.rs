use indexmap::IndexMap;
use std::fmt;
use std::fmt::Write;

/// An argument value, rendered into GraphQL value literal syntax by this
/// type's [`Display`](fmt::Display) impl.
///
/// Variable references hold the bare variable name (no `$` sigil); the
/// sigil is added when the reference is rendered.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    VarRef(String),
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    EnumToken(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Invoke `visit` with the name of every variable referenced by this
    /// value, at any nesting depth.
    pub(crate) fn for_each_var_ref(&self, visit: &mut dyn FnMut(&str)) {
        match self {
            Value::VarRef(var_name) => visit(var_name),

            Value::List(values) =>
                for value in values {
                    value.for_each_var_ref(visit);
                },

            Value::Object(entries) =>
                for value in entries.values() {
                    value.for_each_var_ref(visit);
                },

            Value::Int(_)
                | Value::Float(_)
                | Value::String(_)
                | Value::Bool(_)
                | Value::Null
                | Value::EnumToken(_)
                => (),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::VarRef(var_name) => write!(f, "${var_name}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::String(value) => write_quoted(f, value),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Null => f.write_str("null"),
            Value::EnumToken(token) => f.write_str(token),

            Value::List(values) => {
                f.write_char('[')?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_char(']')
            },

            Value::Object(entries) => {
                f.write_char('{')?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            },
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            _ => f.write_char(ch)?,
        }
    }
    f.write_char('"')
}
