//! Symmetric HS256 key shared by the issuer and the validator

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use crate::errors::DomainError;

/// The only algorithm tokens are signed and accepted with
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// HMAC key material derived once from the configured secret.
///
/// Holding a `SigningKey` is equivalent to the authority to mint valid
/// tokens. It is built at startup and shared read-only (behind an `Arc`)
/// between the issuer and the validator, so both always use identical bytes.
#[derive(Clone)]
pub struct SigningKey {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("algorithm", &SIGNING_ALGORITHM)
            .finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Creates a signing key from raw secret bytes
    ///
    /// # Arguments
    ///
    /// * `secret` - The shared HMAC secret
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKey)` - Key ready for signing and verification
    /// * `Err(DomainError)` - The secret is empty
    pub fn from_secret(secret: &[u8]) -> Result<Self, DomainError> {
        if secret.is_empty() {
            return Err(DomainError::Configuration {
                message: "signing secret must not be empty".to_string(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        SIGNING_ALGORITHM
    }

    /// Gets the key used for signing
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Gets the key used for verification
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_fails_closed() {
        let result = SigningKey::from_secret(b"");
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let key = SigningKey::from_secret(b"a-very-secret-value-for-testing!!").unwrap();
        let rendered = format!("{:?}", key);
        assert!(!rendered.contains("a-very-secret"));
        assert!(rendered.contains("HS256"));
    }
}
