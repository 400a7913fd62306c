//! In-memory implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Mock token repository for testing
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token_hash) {
            return Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            });
        }

        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_hash).cloned())
    }

    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;

        match tokens.get_mut(token_hash) {
            Some(token) if !token.is_revoked && !token.is_expired() => {
                token.revoke();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, token| !token.is_expired());
        Ok(before - tokens.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = MockTokenRepository::new();
        let token = RefreshToken::new(Uuid::new_v4(), "hash1".to_string());

        repo.save_refresh_token(token.clone()).await.unwrap();

        let found = repo.find_refresh_token("hash1").await.unwrap().unwrap();
        assert_eq!(found.id, token.id);
        assert!(repo.find_refresh_token("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_revoke_is_single_shot() {
        let repo = MockTokenRepository::new();
        let token = RefreshToken::new(Uuid::new_v4(), "hash1".to_string());
        repo.save_refresh_token(token).await.unwrap();

        assert!(repo.revoke_token("hash1").await.unwrap());
        // Second revocation reports failure, matching the deny-list contract
        assert!(!repo.revoke_token("hash1").await.unwrap());
        assert!(!repo.revoke_token("unknown").await.unwrap());
    }

    #[tokio::test]
    async fn test_revoke_expired_token_fails() {
        let repo = MockTokenRepository::new();
        let mut token = RefreshToken::new(Uuid::new_v4(), "stale".to_string());
        token.expires_at = Utc::now() - Duration::days(1);
        repo.save_refresh_token(token).await.unwrap();

        // An expired token cannot be revoked, only cleaned up
        assert!(!repo.revoke_token("stale").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_expired_tokens() {
        let repo = MockTokenRepository::new();
        let mut expired = RefreshToken::new(Uuid::new_v4(), "old".to_string());
        expired.expires_at = Utc::now() - Duration::days(1);
        let live = RefreshToken::new(Uuid::new_v4(), "new".to_string());

        repo.save_refresh_token(expired).await.unwrap();
        repo.save_refresh_token(live).await.unwrap();

        assert_eq!(repo.delete_expired_tokens().await.unwrap(), 1);
        assert!(repo.find_refresh_token("old").await.unwrap().is_none());
        assert!(repo.find_refresh_token("new").await.unwrap().is_some());
    }
}
