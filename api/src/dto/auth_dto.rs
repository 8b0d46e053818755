use serde::{Deserialize, Serialize};
use tg_core::domain::entities::token::{IssuedToken, TOKEN_TYPE};
use validator::Validate;

#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 128))]
    pub username: String,
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

// Keeps the password out of request logs
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64, // seconds
}

impl From<IssuedToken> for LoginResponse {
    fn from(issued: IssuedToken) -> Self {
        let expires_in = issued.expires_in();
        Self {
            token: issued.token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in,
        }
    }
}
