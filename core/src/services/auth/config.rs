//! Configuration for the authentication service

/// Minimum accepted password length
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Maximum accepted password length (bcrypt truncates past 72 bytes)
pub const PASSWORD_MAX_LENGTH: usize = 68;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthServiceConfig {
    /// Reduced-cost configuration for tests
    pub fn for_testing() -> Self {
        Self { bcrypt_cost: 4 }
    }
}
