//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            access_token_expiry: 900,      // 15 minutes
            refresh_token_expiry: 604_800, // 7 days
            issuer: String::from("favoritehub"),
            audience: String::from("favoritehub-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.secret = secret;
        }
        if let Ok(expiry) = std::env::var("JWT_ACCESS_TOKEN_EXPIRY") {
            if let Ok(seconds) = expiry.parse() {
                config.access_token_expiry = seconds;
            }
        }
        if let Ok(expiry) = std::env::var("JWT_REFRESH_TOKEN_EXPIRY") {
            if let Ok(seconds) = expiry.parse() {
                config.refresh_token_expiry = seconds;
            }
        }
        config
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86_400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiries() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 15 * 60);
        assert_eq!(config.refresh_token_expiry, 7 * 24 * 60 * 60);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_builder() {
        let config = JwtConfig::new("test-secret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);
        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.refresh_token_expiry, 14 * 86_400);
        assert!(!config.is_using_default_secret());
    }
}
