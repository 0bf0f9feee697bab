//! The tree view instance: one taxonomy plus its expansion state.

use tracing::instrument;

use crate::domain::{Taxonomy, TaxonomySummary};
use crate::view::layout::{layout_section, SectionLayout};
use crate::view::state::ExpansionState;

/// Collapsible view over one taxonomy.
///
/// Owns the expansion state exclusively; `toggle` is the single mutation
/// entry point. Expansion state lives and dies with the view instance.
#[derive(Debug)]
pub struct TreeView {
    taxonomy: Taxonomy,
    expansion: ExpansionState,
}

impl TreeView {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            expansion: ExpansionState::new(),
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expansion.is_expanded(key)
    }

    /// Flip the expansion flag for a section. A key not present in the
    /// taxonomy flips an inert flag and changes no rendered output.
    #[instrument(level = "debug", skip(self))]
    pub fn toggle(&mut self, key: &str) {
        self.expansion.toggle(key);
    }

    /// Layouts for all sections in display order.
    pub fn layouts(&self) -> Vec<SectionLayout> {
        self.taxonomy
            .sections()
            .iter()
            .map(|section| layout_section(section, self.expansion.is_expanded(&section.key)))
            .collect()
    }

    pub fn summary(&self) -> TaxonomySummary {
        self.taxonomy.summary()
    }
}
