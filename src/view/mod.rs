//! View layer: collapsible tree over the taxonomy
//!
//! Split the way the rendering pipeline flows: `state` owns the per-section
//! expansion flags, `layout` computes pure render instructions from
//! (section, expanded), `render` formats layouts into terminal output.

pub mod layout;
pub mod render;
pub mod state;
mod tree_view;

pub use layout::{layout_section, HeaderRow, Indicator, ItemRow, SectionBody, SectionLayout};
pub use render::{render, render_with_cursor, Glyphs};
pub use state::ExpansionState;
pub use tree_view::TreeView;
