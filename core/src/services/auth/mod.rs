//! Authentication service module
//!
//! Composes credential verification with token issuance: a token is minted
//! only for identities the credential verifier accepted.

mod service;


pub use service::AuthService;
