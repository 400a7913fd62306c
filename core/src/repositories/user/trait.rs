//! User repository trait defining the interface for user data persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between domain and infrastructure layers.
/// Email lookups always receive the lowercase-normalized form.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their normalized email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// Email uniqueness is enforced by the storage layer (unique index);
    /// a duplicate insert fails with `AuthError::EmailAlreadyExists` even
    /// when two creations race.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Auth(AuthError::EmailAlreadyExists))` - Email taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user's status flags
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Check whether a user exists with the given normalized email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
