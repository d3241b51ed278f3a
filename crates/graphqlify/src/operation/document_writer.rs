use crate::Value;
use crate::operation::FragmentRegistry;
use crate::operation::Operation;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use indexmap::IndexMap;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Renders one [`Operation`] descriptor as GraphQL document text.
///
/// The walk is pure and synchronous: given a validated, immutable
/// descriptor it is a deterministic function of the tree, so rendering
/// the same operation twice yields byte-identical documents. Each writer
/// owns a fresh [`FragmentRegistry`] and renders exactly one document.
pub(crate) struct DocumentWriter {
    out: String,
    registry: FragmentRegistry,
}
impl DocumentWriter {
    pub(crate) fn new() -> DocumentWriter {
        DocumentWriter {
            out: String::new(),
            registry: FragmentRegistry::new(),
        }
    }

    pub(crate) fn write_operation(mut self, operation: &Operation) -> String {
        self.out.push_str(operation.kind().keyword());

        if let Some(op_name) = operation.name() {
            self.out.push(' ');
            self.out.push_str(op_name);
        }

        if !operation.variables().is_empty() {
            self.out.push('(');
            for (idx, variable) in operation.variables().values().enumerate() {
                if idx > 0 {
                    self.out.push_str(", ");
                }
                let _ = write!(
                    self.out,
                    "${}: {}",
                    variable.name(),
                    variable.type_annotation(),
                );
            }
            self.out.push(')');
        }

        self.out.push(' ');
        self.write_selection_set(operation.selection_set(), 0);
        self.write_fragment_definitions();
        self.out
    }

    /// Append the definition of every registered fragment, in
    /// first-registration order, separated by blank lines.
    ///
    /// The registry can grow while a fragment body is being written: a
    /// spread inside another fragment registers the nested fragment here,
    /// and a later iteration picks it up. Each index is visited once, so
    /// each fragment's body is scanned and rendered exactly once no
    /// matter how many sites spread it.
    fn write_fragment_definitions(&mut self) {
        let mut idx = 0;
        while let Some(fragment) = self.registry.get_index(idx).cloned() {
            self.out.push_str("\n\n");
            let _ = write!(
                self.out,
                "fragment {} on {} ",
                fragment.name(),
                fragment.type_condition(),
            );
            self.write_selection_set(fragment.selection_set(), 0);
            idx += 1;
        }
    }

    fn write_selection_set(
        &mut self,
        selection_set: &SelectionSet,
        depth: usize,
    ) {
        self.out.push_str("{\n");
        for (key, selection) in selection_set.selections() {
            self.write_indent(depth + 1);
            self.write_entry(key, selection, depth + 1);
            self.out.push('\n');
        }
        self.write_indent(depth);
        self.out.push('}');
    }

    /// Write one selection-set entry (without its line terminator).
    fn write_entry(&mut self, key: &str, selection: &Selection, depth: usize) {
        match selection {
            // Scalar kinds have no rendering effect; the key is the
            // entire entry.
            Selection::Scalar(_) => self.out.push_str(key),

            Selection::Object(selection_set) => {
                self.out.push_str(key);
                self.out.push(' ');
                self.write_selection_set(selection_set, depth);
            },

            // Lists are structurally transparent.
            Selection::List(element) => self.write_entry(key, element, depth),

            Selection::Parameterized { arguments, body } => {
                self.out.push_str(key);
                self.write_arguments(arguments);
                self.write_decorated_body(body, depth);
            },

            Selection::Aliased {
                display_name,
                field_name,
                body,
            } => {
                // The alias affects only the printed head; the enclosing
                // map key is ignored in favor of the names on the node.
                self.out.push_str(display_name);
                self.out.push_str(": ");
                self.write_entry(field_name, body, depth);
            },

            Selection::FragmentSpread(fragment) => {
                self.out.push_str("...");
                self.out.push_str(fragment.name());
                self.registry.register(fragment);
            },

            Selection::InlineFragment(inline_fragment) => {
                self.out.push_str("... on ");
                self.out.push_str(inline_fragment.type_condition());
                self.out.push(' ');
                self.write_selection_set(inline_fragment.selection_set(), depth);
            },
        }
    }

    /// Write whatever follows an already-written field head: nothing for
    /// a scalar body, the braced selection set for an object body.
    fn write_decorated_body(&mut self, body: &Selection, depth: usize) {
        match body {
            Selection::Scalar(_) => (),

            Selection::Object(selection_set) => {
                self.out.push(' ');
                self.write_selection_set(selection_set, depth);
            },

            Selection::List(element) => self.write_decorated_body(element, depth),

            // Stacked decorations compose textually onto the same head.
            Selection::Parameterized { arguments, body } => {
                self.write_arguments(arguments);
                self.write_decorated_body(body, depth);
            },

            Selection::Aliased { body, .. } => {
                self.write_decorated_body(body, depth);
            },

            // A spread or inline fragment as a decorated body still needs
            // enclosing braces to stay grammatical.
            entry @ (Selection::FragmentSpread(_)
                | Selection::InlineFragment(_)) => {
                self.out.push_str(" {\n");
                self.write_indent(depth + 1);
                self.write_entry("", entry, depth + 1);
                self.out.push('\n');
                self.write_indent(depth);
                self.out.push('}');
            },
        }
    }

    fn write_arguments(&mut self, arguments: &IndexMap<String, Value>) {
        self.out.push('(');
        for (idx, (arg_name, arg_value)) in arguments.iter().enumerate() {
            if idx > 0 {
                self.out.push_str(", ");
            }
            let _ = write!(self.out, "{arg_name}: {arg_value}");
        }
        self.out.push(')');
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }
}
