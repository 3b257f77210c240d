//! Integration Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, LeadError>;

/// Failures talking to the lead and mail services
#[derive(Error, Debug)]
pub enum LeadError {
    /// Lead service answered with a non-success status
    #[error("Webform3 API error: {0}")]
    Status(String),

    /// Mail provider refused the message
    #[error("Mail provider rejected message: {0}")]
    MailRejected(String),

    /// Required configuration missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
