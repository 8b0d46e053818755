//! Startup configuration loading for the API server

use tg_shared::{AppConfig, ConfigError, Environment, LoggingConfig};

/// Load `.env.<environment>` and then `.env`, without overriding variables
/// already present in the process environment.
pub fn load_dotenv() {
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();
}

/// Filter string handed to `env_logger` when `RUST_LOG` is unset
pub fn log_filter(logging: &LoggingConfig) -> &str {
    logging.level.as_str()
}

/// Initialise `env_logger` from the loaded logging configuration.
///
/// `RUST_LOG` still takes precedence over the configured level.
pub fn init_logging(logging: &LoggingConfig) {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(log_filter(logging)));
}

/// Load the configuration from the process environment
pub fn load() -> Result<AppConfig, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Load the configuration from an arbitrary lookup
pub fn load_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    AppConfig::from_lookup(lookup)
}

/// Validate a loaded configuration.
///
/// Non-fatal findings are logged as warnings; fatal ones are returned.
/// Call after [`init_logging`].
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    for warning in config.validate()? {
        log::warn!("Configuration warning: {}", warning);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    const PRODUCTION: &[(&str, &str)] = &[
        ("ENVIRONMENT", "production"),
        ("JWT_SECRET", "0123456789abcdef0123456789abcdef"),
        ("JWT_ISSUER", "https://auth.example.com"),
        ("JWT_AUDIENCE", "https://api.example.com"),
        ("AUTH_USERNAME", "ops"),
        ("AUTH_PASSWORD", "correct horse battery staple"),
    ];

    #[test]
    fn test_development_config_loads_with_warnings() {
        let config = load_from(lookup_from(&[("JWT_SECRET", "short")])).unwrap();
        assert!(config.is_development());
        assert_eq!(config.auth.credentials.username, "admin");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_missing_secret_stops_startup() {
        let result = load_from(lookup_from(&[]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingVariable { name: "JWT_SECRET" })
        ));
    }

    #[test]
    fn test_production_rejects_weak_secret() {
        let mut vars = PRODUCTION.to_vec();
        vars[1] = ("JWT_SECRET", "short");
        let config = load_from(lookup_from(&vars)).unwrap();
        assert!(matches!(validate(&config), Err(ConfigError::Insecure { .. })));
    }

    #[test]
    fn test_production_requires_issuer() {
        let vars: Vec<_> = PRODUCTION
            .iter()
            .copied()
            .filter(|(key, _)| *key != "JWT_ISSUER")
            .collect();
        let config = load_from(lookup_from(&vars)).unwrap();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::MissingVariable { name: "JWT_ISSUER" })
        ));
    }

    #[test]
    fn test_log_filter_follows_loaded_config() {
        let config = load_from(lookup_from(PRODUCTION)).unwrap();
        assert_eq!(log_filter(&config.logging), "warn");

        let mut vars = PRODUCTION.to_vec();
        vars.push(("LOG_LEVEL", "trace"));
        let config = load_from(lookup_from(&vars)).unwrap();
        assert_eq!(log_filter(&config.logging), "trace");

        let config = load_from(lookup_from(&[("JWT_SECRET", "short")])).unwrap();
        assert_eq!(log_filter(&config.logging), "debug");
    }
}
