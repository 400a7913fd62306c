//! In-memory implementation of FavoriteRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::favorite::FavoriteList;
use crate::errors::{DomainError, FavoritesError};

use super::r#trait::FavoriteRepository;

/// Mock favorite list repository for testing
pub struct MockFavoriteRepository {
    lists: Arc<RwLock<HashMap<Uuid, FavoriteList>>>,
}

impl MockFavoriteRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            lists: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockFavoriteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FavoriteList>, DomainError> {
        let lists = self.lists.read().await;
        Ok(lists.get(&id).cloned())
    }

    async fn find_by_client_id(
        &self,
        client_id: Uuid,
    ) -> Result<Option<FavoriteList>, DomainError> {
        let lists = self.lists.read().await;
        Ok(lists.values().find(|l| l.client_id == client_id).cloned())
    }

    async fn list(&self) -> Result<Vec<FavoriteList>, DomainError> {
        let lists = self.lists.read().await;
        let mut all: Vec<FavoriteList> = lists.values().cloned().collect();
        all.sort_by_key(|l| l.id);
        Ok(all)
    }

    async fn create(&self, list: FavoriteList) -> Result<FavoriteList, DomainError> {
        let mut lists = self.lists.write().await;

        if lists.values().any(|l| l.client_id == list.client_id) {
            return Err(FavoritesError::DuplicateList.into());
        }

        lists.insert(list.id, list.clone());
        Ok(list)
    }

    async fn add_product(&self, list_id: Uuid, product_id: Uuid) -> Result<bool, DomainError> {
        let mut lists = self.lists.write().await;
        let list = lists
            .get_mut(&list_id)
            .ok_or(FavoritesError::ListNotFound)?;
        Ok(list.add(product_id))
    }

    async fn remove_product(&self, list_id: Uuid, product_id: Uuid) -> Result<bool, DomainError> {
        let mut lists = self.lists.write().await;
        let list = lists
            .get_mut(&list_id)
            .ok_or(FavoritesError::ListNotFound)?;
        Ok(list.remove(product_id))
    }
}
