//! # TokenGate Core
//!
//! Token issuance and validation for the TokenGate backend.
//! This crate contains the claim set entity, the HS256 token issuer and
//! validator, the credential verification capability and the error types
//! shared by the HTTP layer.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::{Claims, IssuedToken, ACCESS_TOKEN_EXPIRY_MINUTES, TOKEN_TYPE};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationStage};
pub use repositories::{CredentialVerifier, InMemoryCredentialStore};
pub use services::{
    AuthService, Clock, FixedClock, SigningKey, SystemClock, TokenIssuer, TokenServiceConfig,
    TokenValidator,
};
