//! Unit tests for domain error types

use super::*;

#[test]
fn test_token_errors_bridge_into_domain_error() {
    let err: DomainError = TokenError::Expired.into();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
    assert_eq!(err.to_string(), "Token expired");
}

#[test]
fn test_authorization_failures() {
    assert!(DomainError::Unauthorized.is_authorization_failure());
    assert!(DomainError::from(AuthError::InvalidCredentials).is_authorization_failure());
    assert!(DomainError::from(TokenError::InvalidSignature).is_authorization_failure());

    let store = DomainError::from(AuthError::CredentialStore {
        message: "unavailable".to_string(),
    });
    assert!(!store.is_authorization_failure());
    assert!(!DomainError::Internal { message: "boom".to_string() }.is_authorization_failure());
    assert!(!DomainError::from(TokenError::GenerationFailed).is_authorization_failure());
}

#[test]
fn test_credential_error_message_does_not_name_the_field() {
    let message = AuthError::InvalidCredentials.to_string();
    assert_eq!(message, "Invalid username or password");
}
