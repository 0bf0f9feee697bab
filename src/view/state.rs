//! Per-section expansion flags.

use std::collections::HashMap;

use tracing::instrument;

/// Mapping from section key to expanded flag.
///
/// Absent keys read as `true`: every section starts expanded, so the first
/// toggle collapses. The map is owned by one `TreeView` instance, mutated
/// only through `toggle`, and never persisted.
#[derive(Debug, Default)]
pub struct ExpansionState {
    flags: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(true)
    }

    /// Flip the flag for `key`. Unknown keys are treated as expanded before
    /// the flip, so toggling them is a benign state change, not an error.
    #[instrument(level = "trace", skip(self))]
    pub fn toggle(&mut self, key: &str) {
        let flipped = !self.is_expanded(key);
        self.flags.insert(key.to_string(), flipped);
    }
}
