use crate::operation::Fragment;
use indexmap::IndexMap;
use std::sync::Arc;

/// Collects the fragments encountered while writing a single document,
/// deduplicated by name in first-registration order.
///
/// A registry is scoped to one render: "already registered" is only
/// meaningful within one document, so the writer creates a fresh registry
/// per operation and never shares one across renders.
#[derive(Debug)]
pub(crate) struct FragmentRegistry {
    fragments: IndexMap<String, Arc<Fragment>>,
}
impl FragmentRegistry {
    pub(crate) fn new() -> FragmentRegistry {
        FragmentRegistry {
            fragments: IndexMap::new(),
        }
    }

    /// Register a fragment under its name. Returns whether this was the
    /// first registration of that name; later registrations are no-ops.
    pub(crate) fn register(&mut self, fragment: &Arc<Fragment>) -> bool {
        if self.fragments.contains_key(fragment.name()) {
            return false;
        }

        log::trace!("registering fragment `{}`", fragment.name());
        self.fragments.insert(
            fragment.name().to_string(),
            Arc::clone(fragment),
        );
        true
    }

    /// The fragment at `index` in first-registration order.
    pub(crate) fn get_index(&self, index: usize) -> Option<&Arc<Fragment>> {
        self.fragments.get_index(index).map(|(_, fragment)| fragment)
    }
}
