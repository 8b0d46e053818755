//! Token issuance

use std::sync::Arc;

use jsonwebtoken::{encode, Header};

use crate::domain::entities::token::{Claims, IssuedToken};
use crate::errors::{DomainError, TokenError};

use super::clock::{Clock, SystemClock};
use super::config::TokenServiceConfig;
use super::signing_key::SigningKey;

/// Mints signed, time-bounded access tokens for verified identities
pub struct TokenIssuer {
    key: Arc<SigningKey>,
    config: TokenServiceConfig,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Creates a new issuer using the wall clock
    ///
    /// # Arguments
    ///
    /// * `key` - Signing key shared with the validator
    /// * `config` - Issuer and audience written into every token
    pub fn new(key: Arc<SigningKey>, config: TokenServiceConfig) -> Self {
        Self::with_clock(key, config, Arc::new(SystemClock))
    }

    /// Creates a new issuer with an explicit time source
    pub fn with_clock(
        key: Arc<SigningKey>,
        config: TokenServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { key, config, clock }
    }

    /// Issues a token for an identity that has already been verified
    ///
    /// # Arguments
    ///
    /// * `subject` - The authenticated principal
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The compact JWT and the claims it carries
    /// * `Err(DomainError)` - Signing failed
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, DomainError> {
        let claims = Claims::new_access_token(
            subject,
            self.config.issuer.as_str(),
            self.config.audience.as_str(),
            self.clock.now(),
        );

        tracing::debug!(
            sub = %claims.sub,
            jti = %claims.jti,
            iss = %claims.iss,
            aud = %claims.aud,
            iat = claims.iat,
            exp = claims.exp,
            "Issuing access token"
        );

        let token = self.encode_jwt(&claims)?;
        Ok(IssuedToken::new(token, claims))
    }

    /// Encodes claims into a compact JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.key.algorithm());
        encode(&header, claims, self.key.encoding_key()).map_err(|e| {
            tracing::error!("Failed to sign access token: {}", e);
            DomainError::Token(TokenError::GenerationFailed)
        })
    }
}
