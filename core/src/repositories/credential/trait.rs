//! Credential verification capability.
//!
//! Issuance never happens without a positive answer from an implementation
//! of this trait. A production deployment backs it with an identity store;
//! the in-memory implementation covers development and tests.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Checks a username/password pair against an identity store
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use tg_core::repositories::CredentialVerifier;
/// use tg_core::errors::DomainError;
///
/// struct LdapVerifier {
///     // directory connection
/// }
///
/// #[async_trait]
/// impl CredentialVerifier for LdapVerifier {
///     async fn verify_credentials(
///         &self,
///         username: &str,
///         password: &str,
///     ) -> Result<bool, DomainError> {
///         // Bind against the directory here
///         Ok(false)
///     }
/// }
/// ```
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify a username/password pair
    ///
    /// # Arguments
    /// * `username` - The claimed identity
    /// * `password` - The secret presented for it
    ///
    /// # Returns
    /// * `Ok(true)` - The credentials are valid
    /// * `Ok(false)` - Unknown user or wrong password
    /// * `Err(DomainError)` - The store could not answer
    async fn verify_credentials(&self, username: &str, password: &str)
        -> Result<bool, DomainError>;
}
