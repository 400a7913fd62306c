//! Favorite list repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::favorite::FavoriteList;
use crate::errors::DomainError;

/// Repository trait for FavoriteList persistence operations
///
/// The one-list-per-client rule and membership uniqueness are enforced by
/// the storage layer (unique index on client_id, composite key on list
/// membership) so that concurrent writers cannot race past the checks.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Find a favorite list by its id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FavoriteList>, DomainError>;

    /// Find the favorite list owned by a client, if any
    async fn find_by_client_id(&self, client_id: Uuid) -> Result<Option<FavoriteList>, DomainError>;

    /// List all favorite lists ordered by id
    async fn list(&self) -> Result<Vec<FavoriteList>, DomainError>;

    /// Create an empty favorite list for a client
    ///
    /// # Errors
    /// * `FavoritesError::DuplicateList` - The client already owns a list
    async fn create(&self, list: FavoriteList) -> Result<FavoriteList, DomainError>;

    /// Add a product to a list's membership
    ///
    /// # Returns
    /// * `Ok(true)` - Product was added
    /// * `Ok(false)` - Product was already a member
    async fn add_product(&self, list_id: Uuid, product_id: Uuid) -> Result<bool, DomainError>;

    /// Remove a product from a list's membership
    ///
    /// # Returns
    /// * `Ok(true)` - Product was removed
    /// * `Ok(false)` - Product was not a member
    async fn remove_product(&self, list_id: Uuid, product_id: Uuid) -> Result<bool, DomainError>;
}
