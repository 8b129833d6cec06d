//! Domain Errors
//!
//! Error types for domain operations. Validation variants render the
//! exact user-facing message shown for a rejected submission.

use thiserror::Error;

use super::value_objects::ReportTarget;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{}", .0.empty_term_message())]
    EmptyTerm(ReportTarget),

    #[error("Email address cannot be empty.")]
    EmptyEmail,

    /// Carries the rejected address unchanged
    #[error("Invalid email address format.")]
    InvalidEmail(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn transport<E: std::fmt::Display>(err: E) -> Self {
        Self::Transport(err.to_string())
    }

    /// Whether this error came from input validation (no network call made)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyTerm(_) | Self::EmptyEmail | Self::InvalidEmail(_)
        )
    }
}
