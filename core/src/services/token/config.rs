//! Configuration for the token service

use crate::domain::entities::token::{
    ACCESS_TOKEN_EXPIRY_MINUTES, JWT_AUDIENCE, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_DAYS,
};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret (HS256)
    pub jwt_secret: String,
    /// Token issuer claim
    pub issuer: String,
    /// Token audience claim
    pub audience: String,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
            access_token_expiry_minutes: ACCESS_TOKEN_EXPIRY_MINUTES,
            refresh_token_expiry_days: REFRESH_TOKEN_EXPIRY_DAYS,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a config with the given signing secret
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}
