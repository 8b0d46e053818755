//! Token service module for JWT management
//!
//! This module handles the token lifecycle:
//! - HS256 signing key shared by issuer and validator
//! - Access token issuance with a fixed 30 minute lifetime
//! - The validation pipeline run before a protected resource executes

mod clock;
mod config;
mod issuer;
mod signing_key;
mod validator;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::TokenServiceConfig;
pub use issuer::TokenIssuer;
pub use signing_key::{SigningKey, SIGNING_ALGORITHM};
pub use validator::TokenValidator;
