//! In-memory, bcrypt-backed credential store

use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::{AuthError, DomainError};

use super::trait_::CredentialVerifier;

/// Password hashed into the stand-in hash used for unknown usernames
const UNKNOWN_USER_PASSWORD: &str = "tokengate-unknown-user";

/// Username to bcrypt hash map, fixed after construction.
///
/// Unknown usernames are compared against a stand-in hash of the same cost,
/// so both rejection paths pay for one bcrypt comparison.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    users: HashMap<String, String>,
    unknown_user_hash: Option<String>,
}

impl InMemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user with a plain-text password, hashed with the default cost
    pub fn with_user(self, username: &str, password: &str) -> Result<Self, DomainError> {
        self.with_user_cost(username, password, bcrypt::DEFAULT_COST)
    }

    /// Add a user, hashing the password with an explicit bcrypt cost
    pub fn with_user_cost(
        mut self,
        username: &str,
        password: &str,
        cost: u32,
    ) -> Result<Self, DomainError> {
        let hash = hash_password(password, cost)?;
        if self.unknown_user_hash.is_none() {
            self.unknown_user_hash = Some(hash_password(UNKNOWN_USER_PASSWORD, cost)?);
        }
        self.users.insert(username.to_string(), hash);
        Ok(self)
    }

    /// Add a user from an existing bcrypt hash
    pub fn with_hashed_user(mut self, username: &str, password_hash: &str) -> Self {
        if self.unknown_user_hash.is_none() {
            // Only its cost matters; the comparison result is discarded
            self.unknown_user_hash = Some(password_hash.to_string());
        }
        self.users
            .insert(username.to_string(), password_hash.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Hash the password is compared against, and whether the user exists.
    ///
    /// `None` only for an empty store.
    pub(crate) fn comparison_target(&self, username: &str) -> Option<(String, bool)> {
        match self.users.get(username) {
            Some(hash) => Some((hash.clone(), true)),
            None => self
                .unknown_user_hash
                .as_ref()
                .map(|hash| (hash.clone(), false)),
        }
    }
}

fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    bcrypt::hash(password, cost).map_err(|e| {
        DomainError::Auth(AuthError::CredentialStore {
            message: format!("Failed to hash password: {}", e),
        })
    })
}

#[async_trait]
impl CredentialVerifier for InMemoryCredentialStore {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, DomainError> {
        let Some((hash, known)) = self.comparison_target(username) else {
            return Ok(false);
        };

        // bcrypt is CPU-bound; keep it off the request worker
        let password = password.to_string();
        let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| {
                DomainError::Auth(AuthError::CredentialStore {
                    message: format!("Password verification task failed: {}", e),
                })
            })?;

        if !known {
            return Ok(false);
        }

        result.map_err(|e| {
            DomainError::Auth(AuthError::CredentialStore {
                message: format!("Stored hash for '{}' is unusable: {}", username, e),
            })
        })
    }
}
