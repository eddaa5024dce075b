//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid grid parameters.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid grid size '{0}': expected a positive integer")]
    InvalidSize(String),
}
