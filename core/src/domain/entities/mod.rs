//! Domain entities representing core business objects.

pub mod token;

// Re-export commonly used types
pub use token::{Claims, IssuedToken, ACCESS_TOKEN_EXPIRY_MINUTES, TOKEN_TYPE};
