//! Authentication route handlers
//!
//! Exchanges a username/password pair for a signed access token.

pub mod login;

use std::sync::Arc;

use tg_core::repositories::CredentialVerifier;
use tg_core::services::auth::AuthService;

/// Application state shared by the authentication handlers
pub struct AppState<V>
where
    V: CredentialVerifier,
{
    pub auth_service: Arc<AuthService<V>>,
}

impl<V> AppState<V>
where
    V: CredentialVerifier,
{
    pub fn new(auth_service: Arc<AuthService<V>>) -> Self {
        Self { auth_service }
    }
}
