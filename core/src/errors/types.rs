//! Error types for credential verification and token handling

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Credential store failure: {message}")]
    CredentialStore { message: String },
}

/// Token-related errors.
///
/// The variants identify the validation stage that rejected a token. They
/// are meant for logs only; callers see a uniform authorization failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Unexpected token algorithm")]
    InvalidAlgorithm,

    #[error("Unexpected token issuer")]
    InvalidIssuer,

    #[error("Unexpected token audience")]
    InvalidAudience,

    #[error("Token expired")]
    Expired,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Stages of the validation pipeline, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStage {
    Parse,
    Signature,
    Claims,
    Lifetime,
}

impl std::fmt::Display for ValidationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValidationStage::Parse => "parse",
            ValidationStage::Signature => "signature",
            ValidationStage::Claims => "claims",
            ValidationStage::Lifetime => "lifetime",
        };
        f.write_str(name)
    }
}

impl TokenError {
    /// Stage at which a token was rejected
    pub fn stage(&self) -> ValidationStage {
        match self {
            TokenError::Malformed | TokenError::GenerationFailed => ValidationStage::Parse,
            TokenError::InvalidSignature | TokenError::InvalidAlgorithm => {
                ValidationStage::Signature
            }
            TokenError::InvalidIssuer
            | TokenError::InvalidAudience
            | TokenError::MissingClaim { .. } => ValidationStage::Claims,
            TokenError::Expired => ValidationStage::Lifetime,
        }
    }
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                TokenError::InvalidAlgorithm
            }
            ErrorKind::InvalidIssuer => TokenError::InvalidIssuer,
            ErrorKind::InvalidAudience => TokenError::InvalidAudience,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
                claim: claim.clone(),
            },
            _ => TokenError::Malformed,
        }
    }
}
