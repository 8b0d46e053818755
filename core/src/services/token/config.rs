//! Configuration for the token services

use tg_shared::JwtConfig;

/// Expected issuer and audience, shared by the issuer and the validator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenServiceConfig {
    /// Value written to and required in the `iss` claim
    pub issuer: String,
    /// Value written to and required in the `aud` claim
    pub audience: String,
}

impl TokenServiceConfig {
    pub fn new(issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Builds the config from optional values.
    ///
    /// Absent values become empty strings; an empty issuer or audience is a
    /// deployment defect, not a signing failure.
    pub fn from_optional(issuer: Option<String>, audience: Option<String>) -> Self {
        if issuer.is_none() {
            tracing::warn!("No token issuer configured, using an empty issuer");
        }
        if audience.is_none() {
            tracing::warn!("No token audience configured, using an empty audience");
        }
        Self {
            issuer: issuer.unwrap_or_default(),
            audience: audience.unwrap_or_default(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());
        Self::from_optional(non_empty(&config.issuer), non_empty(&config.audience))
    }
}
