//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError, ValidationStage};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Whether the error must be reported to the caller as an authorization failure
    pub fn is_authorization_failure(&self) -> bool {
        match self {
            DomainError::Unauthorized | DomainError::Auth(AuthError::InvalidCredentials) => true,
            // Signing failures are server faults
            DomainError::Token(err) => *err != TokenError::GenerationFailed,
            _ => false,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;
