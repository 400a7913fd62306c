//! In-memory implementation of ClientRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::client::Client;
use crate::errors::{DomainError, ValidationError};

use super::r#trait::ClientRepository;

/// Mock client repository for testing
pub struct MockClientRepository {
    clients: Arc<RwLock<HashMap<Uuid, Client>>>,
}

impl MockClientRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DomainError> {
        let clients = self.clients.read().await;
        Ok(clients.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Client>, DomainError> {
        let clients = self.clients.read().await;
        let mut all: Vec<Client> = clients.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn create(&self, client: Client) -> Result<Client, DomainError> {
        let mut clients = self.clients.write().await;

        if clients.values().any(|c| c.email == client.email) {
            return Err(DomainError::ValidationErr(ValidationError::DuplicateValue {
                field: "email".to_string(),
            }));
        }

        clients.insert(client.id, client.clone());
        Ok(client)
    }

    async fn update(&self, client: Client) -> Result<Client, DomainError> {
        let mut clients = self.clients.write().await;

        if !clients.contains_key(&client.id) {
            return Err(DomainError::NotFound {
                resource: "client".to_string(),
            });
        }
        if clients
            .values()
            .any(|c| c.email == client.email && c.id != client.id)
        {
            return Err(DomainError::ValidationErr(ValidationError::DuplicateValue {
                field: "email".to_string(),
            }));
        }

        clients.insert(client.id, client.clone());
        Ok(client)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut clients = self.clients.write().await;
        Ok(clients.remove(&id).is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let clients = self.clients.read().await;
        Ok(clients.values().any(|c| c.email == email))
    }
}
