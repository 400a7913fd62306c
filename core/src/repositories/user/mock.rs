//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

/// Mock user repository for testing, keyed by email like the unique index
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(DomainError::Auth(AuthError::EmailAlreadyExists));
        }

        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.email) {
            return Err(DomainError::Auth(AuthError::UserNotFound));
        }

        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.contains_key(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockUserRepository::new();
        let user = User::new("a@b.com".to_string(), "hash".to_string());

        let created = repo.create(user.clone()).await.unwrap();
        assert_eq!(created.id, user.id);

        let found = repo.find_by_email("a@b.com").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);

        let by_id = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = MockUserRepository::new();
        let first = User::new("a@b.com".to_string(), "hash1".to_string());
        let second = User::new("a@b.com".to_string(), "hash2".to_string());

        repo.create(first).await.unwrap();
        let err = repo.create(second).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::Auth(AuthError::EmailAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_exists_by_email() {
        let repo = MockUserRepository::new();
        assert!(!repo.exists_by_email("a@b.com").await.unwrap());

        repo.create(User::new("a@b.com".to_string(), "hash".to_string()))
            .await
            .unwrap();
        assert!(repo.exists_by_email("a@b.com").await.unwrap());
    }
}
