//! Client repository trait defining the interface for client persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::client::Client;
use crate::errors::DomainError;

/// Repository trait for Client entity persistence operations
///
/// Client email uniqueness is enforced by the storage layer (unique index);
/// duplicate inserts fail with `ValidationError::DuplicateValue`.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find a client by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DomainError>;

    /// List clients ordered by id
    async fn list(&self) -> Result<Vec<Client>, DomainError>;

    /// Create a new client
    async fn create(&self, client: Client) -> Result<Client, DomainError>;

    /// Update an existing client
    async fn update(&self, client: Client) -> Result<Client, DomainError>;

    /// Delete a client
    ///
    /// # Returns
    /// * `Ok(true)` - Client was deleted
    /// * `Ok(false)` - Client not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check whether a client exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
