//! Repository interfaces for identity data.

pub mod credential;

pub use credential::{CredentialVerifier, InMemoryCredentialStore};
