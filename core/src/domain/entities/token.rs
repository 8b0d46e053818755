//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token lifetime (30 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Bearer scheme name as sent in the `Authorization` header
pub const TOKEN_TYPE: &str = "Bearer";

/// Claims structure for JWT payload
///
/// Issuer and audience live inside the signed payload, so altering either
/// one invalidates the signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (authenticated username)
    pub sub: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for an access token issued at `now`
    ///
    /// # Arguments
    ///
    /// * `subject` - The authenticated principal
    /// * `issuer` - The configured issuer
    /// * `audience` - The configured audience
    /// * `now` - Issuance instant
    pub fn new_access_token(
        subject: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let expiry = now + Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES);

        Self {
            sub: subject.into(),
            jti: Uuid::new_v4().to_string(),
            iss: issuer.into(),
            aud: audience.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Whether the claims are expired at `now`.
    ///
    /// A token is usable strictly before its expiry second.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Expiry as a UTC instant
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// A freshly minted token as handed back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Compact serialized JWT
    pub token: String,

    /// Claims embedded in the token
    pub claims: Claims,
}

impl IssuedToken {
    pub fn new(token: String, claims: Claims) -> Self {
        Self { token, claims }
    }

    /// Seconds of validity left at issuance
    pub fn expires_in(&self) -> i64 {
        self.claims.exp - self.claims.iat
    }
}
