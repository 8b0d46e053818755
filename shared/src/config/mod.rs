//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing secret, issuer/audience and the seed account
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server bind configuration
//!
//! Everything is read once at startup into immutable structs. Loading goes
//! through a lookup closure so tests can supply variables without touching
//! the process environment.

pub mod auth;
pub mod environment;
pub mod server;

use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, CredentialsConfig, JwtConfig};
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;

/// Errors raised while loading or validating configuration.
///
/// All of them are fatal: the service must not start.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration: {name}")]
    MissingVariable { name: &'static str },

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("Insecure value for {name}: {reason}")]
    Insecure { name: &'static str, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Build the configuration from a variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);
        let logging = match lookup("LOG_LEVEL") {
            Some(level) => LoggingConfig { level },
            None => LoggingConfig::for_environment(environment),
        };

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(&lookup)?,
            auth: AuthConfig::from_lookup(&lookup, environment)?,
            logging,
        })
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Validate the loaded configuration, returning the non-fatal warnings
    pub fn validate(&self) -> Result<Vec<String>, ConfigError> {
        if self.auth.credentials.username.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "AUTH_USERNAME",
                reason: "must not be empty".to_string(),
            });
        }
        self.auth.jwt.validate(self.environment)
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
