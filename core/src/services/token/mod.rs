//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - JWT access token generation and verification
//! - Opaque refresh token issuance and exchange
//! - Token revocation and cleanup of expired tokens

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
