//! Expand/collapse state for browser rows
//!
//! Rows are identified by the scope they were rendered in plus their display
//! title. Within one scope at most one row is open at a time: opening a row
//! closes every other row of that scope, like an accordion.

use std::collections::HashMap;
use std::fmt;

/// Identity of one disclosable row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisclosureKey {
    /// Logical view the row belongs to
    pub scope: String,
    /// Display title of the row
    pub title: String,
}

impl DisclosureKey {
    /// Create a key for `title` inside `scope`
    #[must_use]
    pub fn new(scope: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for DisclosureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.scope, self.title)
    }
}

/// Keyed open/closed state with single-open semantics per scope
#[derive(Debug, Clone, Default)]
pub struct DisclosureRegistry {
    states: HashMap<DisclosureKey, bool>,
}

impl DisclosureRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is open; unknown keys are closed
    #[must_use]
    pub fn get(&self, key: &DisclosureKey) -> bool {
        self.states.get(key).copied().unwrap_or(false)
    }

    /// Set `key` to `open`
    ///
    /// Opening closes every other row in the same scope first.
    pub fn set(&mut self, key: DisclosureKey, open: bool) {
        if open {
            self.states.retain(|other, _| other.scope != key.scope);
        }
        self.states.insert(key, open);
    }

    /// Flip `key`, returning its new state
    pub fn toggle(&mut self, key: DisclosureKey) -> bool {
        let open = !self.get(&key);
        self.set(key, open);
        open
    }

    /// Forget every row of `scope`
    pub fn clear_scope(&mut self, scope: &str) {
        self.states.retain(|key, _| key.scope != scope);
    }

    /// Forget every row
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Keys currently open, in no particular order
    pub fn open_keys(&self) -> impl Iterator<Item = &DisclosureKey> {
        self.states.iter().filter(|(_, open)| **open).map(|(key, _)| key)
    }
}
