//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::IssuedToken;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::CredentialVerifier;
use crate::services::token::TokenIssuer;

/// Authentication service for the login flow
pub struct AuthService<V>
where
    V: CredentialVerifier,
{
    /// Capability that checks username/password pairs
    credential_verifier: Arc<V>,
    /// Issuer for access tokens
    token_issuer: Arc<TokenIssuer>,
}

impl<V> AuthService<V>
where
    V: CredentialVerifier,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `credential_verifier` - Identity store used to check credentials
    /// * `token_issuer` - Issuer for access tokens
    pub fn new(credential_verifier: Arc<V>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            credential_verifier,
            token_issuer,
        }
    }

    /// Verify credentials and issue an access token
    ///
    /// # Arguments
    ///
    /// * `username` - The claimed identity, becomes the token subject
    /// * `password` - The password presented for it
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - Credentials accepted, token minted
    /// * `Err(DomainError)` - Credentials rejected or the store failed;
    ///   nothing is issued in either case
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<IssuedToken> {
        let verified = self
            .credential_verifier
            .verify_credentials(username, password)
            .await?;

        if !verified {
            tracing::info!(username = %username, "Login rejected");
            return Err(AuthError::InvalidCredentials.into());
        }

        let issued = self.token_issuer.issue(username)?;
        tracing::info!(
            username = %username,
            jti = %issued.claims.jti,
            "Login succeeded, access token issued"
        );
        Ok(issued)
    }
}
