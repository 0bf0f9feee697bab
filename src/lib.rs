//! fintree: terminal viewer for a finance department's process taxonomy.
//!
//! Layers:
//! - `domain`: the fixed taxonomy dataset (sections and process items)
//! - `view`: collapsible tree view model (expansion state, layout, rendering)
//! - `cli`: argument parsing, command dispatch and terminal interaction
//! - `config`: layered display settings

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
pub mod view;
