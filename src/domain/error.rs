//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent dataset precondition violations.
/// A malformed taxonomy is a build-time defect, caught eagerly at startup
/// rather than handled during rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("duplicate section key: {0}")]
    DuplicateSectionKey(String),

    #[error("section '{key}': empty title")]
    EmptySectionTitle { key: String },

    #[error("section '{key}': process {id} has an empty name")]
    EmptyProcessName { key: String, id: u32 },

    #[error("section '{key}': process '{name}' must have a positive id")]
    InvalidProcessId { key: String, name: String },
}
