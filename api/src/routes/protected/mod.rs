//! Bearer-protected test resources

pub mod secure;
