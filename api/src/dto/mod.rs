pub mod auth_dto;
pub mod secure_dto;

pub use auth_dto::{LoginRequest, LoginResponse};
pub use secure_dto::SecureResponse;
