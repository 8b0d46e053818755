//! Token validation pipeline
//!
//! A token is admitted only if every stage passes:
//! 1. Structural parse (three non-empty base64url segments)
//! 2. HS256 signature, with the declared algorithm pinned to HS256
//! 3. Issuer and audience exact match
//! 4. Lifetime: the current instant must be strictly before `exp`
//!
//! The validator keeps no state between calls. A still-valid token can be
//! replayed until it expires.

use std::sync::Arc;

use jsonwebtoken::{decode, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::clock::{Clock, SystemClock};
use super::config::TokenServiceConfig;
use super::signing_key::SigningKey;

/// Number of dot-separated segments in a compact JWS
const COMPACT_SEGMENTS: usize = 3;

/// Verifies bearer tokens presented to protected resources
pub struct TokenValidator {
    key: Arc<SigningKey>,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenValidator {
    /// Creates a new validator using the wall clock
    ///
    /// # Arguments
    ///
    /// * `key` - Signing key shared with the issuer
    /// * `config` - Expected issuer and audience
    pub fn new(key: Arc<SigningKey>, config: &TokenServiceConfig) -> Self {
        Self::with_clock(key, config, Arc::new(SystemClock))
    }

    /// Creates a new validator with an explicit time source
    pub fn with_clock(
        key: Arc<SigningKey>,
        config: &TokenServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut validation = Validation::new(key.algorithm());
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        // Lifetime is checked against the injected clock, without leeway
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Self {
            key,
            validation,
            clock,
        }
    }

    /// Validates a token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The compact JWT, without the `Bearer ` prefix
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The token passed every stage
    /// * `Err(TokenError)` - The first stage that rejected the token
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.run_pipeline(token).map_err(|err| {
            tracing::debug!(stage = %err.stage(), error = %err, "Rejected bearer token");
            err
        })
    }

    fn run_pipeline(&self, token: &str) -> Result<Claims, TokenError> {
        check_structure(token)?;

        // Signature first, then issuer and audience
        let token_data = decode::<Claims>(token, self.key.decoding_key(), &self.validation)?;
        let claims = token_data.claims;

        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

/// Rejects anything that is not three non-empty segments
fn check_structure(token: &str) -> Result<(), TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != COMPACT_SEGMENTS || segments.iter().any(|s| s.is_empty()) {
        return Err(TokenError::Malformed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_structure() {
        assert!(check_structure("a.b.c").is_ok());
        assert_eq!(check_structure("a.b"), Err(TokenError::Malformed));
        assert_eq!(check_structure("a.b.c.d"), Err(TokenError::Malformed));
        assert_eq!(check_structure("a..c"), Err(TokenError::Malformed));
        assert_eq!(check_structure("a.b."), Err(TokenError::Malformed));
        assert_eq!(check_structure(""), Err(TokenError::Malformed));
    }
}
