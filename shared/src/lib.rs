//! Shared configuration and common types for the TokenGate server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types, loaded once at startup
//! - Error response structures and error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CredentialsConfig, Environment, JwtConfig,
    LoggingConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
