//! Authentication and token signing configuration

use serde::Deserialize;

use super::{ConfigError, Environment};

/// Minimum secret length for HS256 (256 bits)
pub const MIN_SECRET_BYTES: usize = 32;

/// Account seeded into the credential store when running in development
pub const DEVELOPMENT_USERNAME: &str = "admin";
pub const DEVELOPMENT_PASSWORD: &str = "password";

/// JWT signing configuration
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    /// Shared HMAC secret used for both signing and verification
    pub secret: String,

    /// JWT issuer claim
    #[serde(default)]
    pub issuer: String,

    /// JWT audience claim
    #[serde(default)]
    pub audience: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl JwtConfig {
    /// Create a new JWT configuration
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Read `JWT_SECRET`, `JWT_ISSUER` and `JWT_AUDIENCE`.
    ///
    /// The secret is mandatory. Issuer and audience fall back to an empty
    /// string and are reported by [`JwtConfig::validate`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").ok_or(ConfigError::MissingVariable {
            name: "JWT_SECRET",
        })?;

        Ok(Self {
            secret,
            issuer: lookup("JWT_ISSUER").unwrap_or_default(),
            audience: lookup("JWT_AUDIENCE").unwrap_or_default(),
        })
    }

    /// Secret bytes as fed to the HMAC key
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    /// Check the configuration for the given environment.
    ///
    /// Returns the non-fatal findings so the caller can log them.
    pub fn validate(&self, environment: Environment) -> Result<Vec<String>, ConfigError> {
        let mut warnings = Vec::new();

        if self.secret.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "JWT_SECRET",
                reason: "must not be empty".to_string(),
            });
        }

        if self.secret.len() < MIN_SECRET_BYTES {
            let reason = format!(
                "secret is {} bytes, at least {} are required for HS256",
                self.secret.len(),
                MIN_SECRET_BYTES
            );
            if environment.is_production() {
                return Err(ConfigError::Insecure { name: "JWT_SECRET", reason });
            }
            warnings.push(reason);
        }

        for (name, value) in [("JWT_ISSUER", &self.issuer), ("JWT_AUDIENCE", &self.audience)] {
            if value.is_empty() {
                if environment.is_production() {
                    return Err(ConfigError::MissingVariable { name });
                }
                warnings.push(format!("{} is not set, tokens carry an empty value", name));
            }
        }

        Ok(warnings)
    }
}

/// Account loaded into the in-memory credential store
#[derive(Clone, Deserialize)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl CredentialsConfig {
    /// Read `AUTH_USERNAME` and `AUTH_PASSWORD`.
    ///
    /// Only development falls back to the well-known demo account.
    pub fn from_lookup<F>(lookup: F, environment: Environment) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup("AUTH_USERNAME");
        let password = lookup("AUTH_PASSWORD");

        match (username, password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            (None, None) if environment.is_development() => Ok(Self {
                username: DEVELOPMENT_USERNAME.to_string(),
                password: DEVELOPMENT_PASSWORD.to_string(),
            }),
            (None, _) => Err(ConfigError::MissingVariable { name: "AUTH_USERNAME" }),
            (Some(_), None) => Err(ConfigError::MissingVariable { name: "AUTH_PASSWORD" }),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Seed account for the credential store
    pub credentials: CredentialsConfig,
}

impl AuthConfig {
    /// Create from a variable lookup
    pub fn from_lookup<F>(lookup: F, environment: Environment) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            jwt: JwtConfig::from_lookup(&lookup)?,
            credentials: CredentialsConfig::from_lookup(&lookup, environment)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const STRONG_SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup_from(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let result = JwtConfig::from_lookup(lookup_from(&[("JWT_ISSUER", "issuer")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingVariable { name: "JWT_SECRET" })
        ));
    }

    #[test]
    fn test_missing_issuer_and_audience_default_to_empty() {
        let config = JwtConfig::from_lookup(lookup_from(&[("JWT_SECRET", STRONG_SECRET)])).unwrap();
        assert_eq!(config.issuer, "");
        assert_eq!(config.audience, "");

        let warnings = config.validate(Environment::Development).unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(config.validate(Environment::Production).is_err());
    }

    #[test]
    fn test_short_secret_rejected_in_production_only() {
        let config = JwtConfig::new("short", "issuer", "audience");
        assert_eq!(config.validate(Environment::Development).unwrap().len(), 1);
        assert!(matches!(
            config.validate(Environment::Production),
            Err(ConfigError::Insecure { .. })
        ));
    }

    #[test]
    fn test_empty_secret_rejected_everywhere() {
        let config = JwtConfig::new("", "issuer", "audience");
        assert!(config.validate(Environment::Development).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new(STRONG_SECRET, "issuer", "audience");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains(STRONG_SECRET));
        assert!(rendered.contains("issuer"));
    }

    #[test]
    fn test_credentials_default_only_in_development() {
        let dev = CredentialsConfig::from_lookup(lookup_from(&[]), Environment::Development).unwrap();
        assert_eq!(dev.username, DEVELOPMENT_USERNAME);
        assert_eq!(dev.password, DEVELOPMENT_PASSWORD);

        assert!(CredentialsConfig::from_lookup(lookup_from(&[]), Environment::Production).is_err());

        let partial = CredentialsConfig::from_lookup(
            lookup_from(&[("AUTH_USERNAME", "ops")]),
            Environment::Development,
        );
        assert!(matches!(
            partial,
            Err(ConfigError::MissingVariable { name: "AUTH_PASSWORD" })
        ));
    }
}
