//! Password hashing helpers built on bcrypt

use crate::errors::DomainError;

/// Hashes a plaintext password with bcrypt at the given cost
pub fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    bcrypt::hash(password, cost).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Verifies a plaintext password against a stored bcrypt hash
///
/// A malformed stored hash is an internal error, not a credential failure.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, DomainError> {
    bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
        message: format!("Password verification failed: {}", e),
    })
}
