//! Tests for the token services


use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use super::{FixedClock, SigningKey, TokenIssuer, TokenServiceConfig, TokenValidator};

pub(super) const SECRET: &[u8] = b"test-secret-key-with-at-least-32-bytes";
pub(super) const ISSUER: &str = "https://auth.tokengate.test";
pub(super) const AUDIENCE: &str = "https://api.tokengate.test";

pub(super) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub(super) fn test_config() -> TokenServiceConfig {
    TokenServiceConfig::new(ISSUER, AUDIENCE)
}

pub(super) fn test_key(secret: &[u8]) -> Arc<SigningKey> {
    Arc::new(SigningKey::from_secret(secret).expect("valid secret"))
}

/// Issuer and validator sharing one key and one manually driven clock
pub(super) struct Fixture {
    pub issuer: TokenIssuer,
    pub validator: TokenValidator,
    pub clock: Arc<FixedClock>,
}

pub(super) fn fixture() -> Fixture {
    let key = test_key(SECRET);
    let clock = Arc::new(FixedClock::new(t0()));
    let config = test_config();

    Fixture {
        issuer: TokenIssuer::with_clock(key.clone(), config.clone(), clock.clone()),
        validator: TokenValidator::with_clock(key, &config, clock.clone()),
        clock,
    }
}
