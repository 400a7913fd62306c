//! Favorites service implementation

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::audit::{ChangeType, EntityType};
use crate::domain::entities::favorite::FavoriteList;
use crate::errors::{DomainResult, FavoritesError};
use crate::repositories::{
    AuditRepository, ClientRepository, FavoriteRepository, ProductRepository,
};
use crate::services::audit::AuditService;

/// Service for managing per-client favorite product lists
///
/// The uniqueness rules (one list per client, no duplicate membership) are
/// ultimately enforced by storage constraints; the checks here exist to
/// produce the domain errors on the common path.
pub struct FavoritesService<F, C, P, A>
where
    F: FavoriteRepository,
    C: ClientRepository,
    P: ProductRepository,
    A: AuditRepository + 'static,
{
    favorite_repository: Arc<F>,
    client_repository: Arc<C>,
    product_repository: Arc<P>,
    audit_service: Arc<AuditService<A>>,
}

impl<F, C, P, A> FavoritesService<F, C, P, A>
where
    F: FavoriteRepository,
    C: ClientRepository,
    P: ProductRepository,
    A: AuditRepository + 'static,
{
    /// Create a new favorites service
    pub fn new(
        favorite_repository: Arc<F>,
        client_repository: Arc<C>,
        product_repository: Arc<P>,
        audit_service: Arc<AuditService<A>>,
    ) -> Self {
        Self {
            favorite_repository,
            client_repository,
            product_repository,
            audit_service,
        }
    }

    /// List all favorite lists
    pub async fn list(&self) -> DomainResult<Vec<FavoriteList>> {
        self.favorite_repository.list().await
    }

    /// Fetch a single favorite list
    pub async fn get(&self, id: Uuid) -> DomainResult<FavoriteList> {
        self.favorite_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FavoritesError::ListNotFound.into())
    }

    /// Create an empty favorite list for a client
    ///
    /// # Errors
    ///
    /// * `FavoritesError::ClientNotFound` - Unknown client
    /// * `FavoritesError::DuplicateList` - Client already owns a list
    pub async fn create_list(
        &self,
        client_id: Uuid,
        actor: Option<String>,
    ) -> DomainResult<FavoriteList> {
        if self
            .client_repository
            .find_by_id(client_id)
            .await?
            .is_none()
        {
            return Err(FavoritesError::ClientNotFound.into());
        }
        if self
            .favorite_repository
            .find_by_client_id(client_id)
            .await?
            .is_some()
        {
            return Err(FavoritesError::DuplicateList.into());
        }

        // The storage unique index on client_id closes the race between the
        // check above and this insert.
        let list = self
            .favorite_repository
            .create(FavoriteList::new(client_id))
            .await?;

        self.audit_service
            .record(
                EntityType::Favorite,
                list.id,
                ChangeType::Create,
                actor,
                list_snapshot(&list),
            )
            .await;

        Ok(list)
    }

    /// Add a product to a list
    ///
    /// # Errors
    ///
    /// * `FavoritesError::ListNotFound` - Unknown list
    /// * `FavoritesError::ProductNotFound` - Unknown product
    /// * `FavoritesError::AlreadyFavorited` - Product already a member
    pub async fn add_product(
        &self,
        list_id: Uuid,
        product_id: Uuid,
        actor: Option<String>,
    ) -> DomainResult<FavoriteList> {
        let list = self.get(list_id).await?;

        if !self.product_repository.exists(product_id).await? {
            return Err(FavoritesError::ProductNotFound.into());
        }
        if list.contains(product_id) {
            return Err(FavoritesError::AlreadyFavorited.into());
        }

        // The composite key on (favorite_id, product_id) makes a concurrent
        // duplicate insert fail rather than double-report success.
        if !self
            .favorite_repository
            .add_product(list_id, product_id)
            .await?
        {
            return Err(FavoritesError::AlreadyFavorited.into());
        }

        let list = self.get(list_id).await?;

        self.audit_service
            .record(
                EntityType::Favorite,
                list.id,
                ChangeType::Update,
                actor,
                list_snapshot(&list),
            )
            .await;

        Ok(list)
    }

    /// Remove a product from a list
    ///
    /// # Errors
    ///
    /// * `FavoritesError::ListNotFound` - Unknown list
    /// * `FavoritesError::ProductNotFound` - Unknown product
    /// * `FavoritesError::NotFavorited` - Product not a member
    pub async fn remove_product(
        &self,
        list_id: Uuid,
        product_id: Uuid,
        actor: Option<String>,
    ) -> DomainResult<FavoriteList> {
        let list = self.get(list_id).await?;

        if !self.product_repository.exists(product_id).await? {
            return Err(FavoritesError::ProductNotFound.into());
        }
        if !list.contains(product_id) {
            return Err(FavoritesError::NotFavorited.into());
        }

        if !self
            .favorite_repository
            .remove_product(list_id, product_id)
            .await?
        {
            return Err(FavoritesError::NotFavorited.into());
        }

        let list = self.get(list_id).await?;

        self.audit_service
            .record(
                EntityType::Favorite,
                list.id,
                ChangeType::Update,
                actor,
                list_snapshot(&list),
            )
            .await;

        Ok(list)
    }
}

fn list_snapshot(list: &FavoriteList) -> serde_json::Value {
    json!({
        "id": list.id.to_string(),
        "client_id": list.client_id.to_string(),
        "product_ids": list
            .product_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>(),
    })
}
