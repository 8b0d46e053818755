pub mod auth;
pub mod protected;
