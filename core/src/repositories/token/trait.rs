//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// # Security Considerations
/// - Tokens are stored hashed, never in the clear
/// - The `is_revoked` flag is the revocation deny-list; it is read from
///   storage on every validation so revocation is immediately visible
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError)` - Save failed (e.g., duplicate token hash)
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its hashed value
    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Revoke a specific refresh token
    ///
    /// # Returns
    /// * `Ok(true)` - Token was revoked by this call
    /// * `Ok(false)` - Token not found or already revoked
    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Remove expired tokens from storage
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens deleted
    async fn delete_expired_tokens(&self) -> Result<usize, DomainError>;
}
