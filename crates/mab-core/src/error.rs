//! Error Types

use thiserror::Error;

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Domain error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Slug does not name one of the offered services
    #[error("Unknown service: {0}")]
    UnknownService(String),

    /// Slug does not name one of the budget ranges on the contact form
    #[error("Unknown budget range: {0}")]
    UnknownBudget(String),
}
