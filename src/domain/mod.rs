//! Domain layer: the taxonomy dataset
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod dataset;
pub mod entities;
pub mod error;

pub use dataset::{Taxonomy, TaxonomySummary};
pub use entities::{ProcessItem, Section};
pub use error::DomainError;
