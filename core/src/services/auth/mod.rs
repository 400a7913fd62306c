//! Authentication service module
//!
//! Handles the registration, login, logout and token refresh flows on top
//! of the user repository and the token service.

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::{AuthService, LoginResult};
