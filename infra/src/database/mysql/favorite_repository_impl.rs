//! MySQL implementation of the FavoriteRepository trait.
//!
//! Two tables back a favorite list: `favorites` (one row per list, unique
//! index on `client_id`) and `favorite_products` (membership rows, composite
//! primary key `(favorite_id, product_id)`). The constraints carry the
//! one-list-per-client and no-duplicate-membership rules under concurrency.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fh_core::domain::entities::favorite::FavoriteList;
use fh_core::errors::{DomainError, FavoritesError};
use fh_core::repositories::FavoriteRepository;

use super::{is_duplicate_key, map_query_error, parse_uuid};

/// MySQL implementation of FavoriteRepository
pub struct MySqlFavoriteRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlFavoriteRepository {
    /// Create a new MySQL favorite repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Load membership rows for a list
    async fn load_members(&self, list_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let query = r#"
            SELECT product_id FROM favorite_products
            WHERE favorite_id = ?
            ORDER BY product_id
        "#;

        let ids = sqlx::query_scalar::<_, String>(query)
            .bind(list_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to load list membership"))?;

        ids.iter()
            .map(|id| parse_uuid(id, "product_id"))
            .collect()
    }

    /// Convert a list row plus its membership into a FavoriteList
    async fn row_to_list(
        &self,
        row: &sqlx::mysql::MySqlRow,
    ) -> Result<FavoriteList, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let client_id: String = row
            .try_get("client_id")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get client_id: {}", e),
            })?;

        let id = parse_uuid(&id, "id")?;
        Ok(FavoriteList {
            id,
            client_id: parse_uuid(&client_id, "client_id")?,
            product_ids: self.load_members(id).await?,
        })
    }
}

#[async_trait]
impl FavoriteRepository for MySqlFavoriteRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FavoriteList>, DomainError> {
        let query = "SELECT id, client_id FROM favorites WHERE id = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to find favorite list"))?;

        match result {
            Some(row) => Ok(Some(self.row_to_list(&row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_client_id(
        &self,
        client_id: Uuid,
    ) -> Result<Option<FavoriteList>, DomainError> {
        let query = "SELECT id, client_id FROM favorites WHERE client_id = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(client_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to find list by client"))?;

        match result {
            Some(row) => Ok(Some(self.row_to_list(&row).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<FavoriteList>, DomainError> {
        let query = "SELECT id, client_id FROM favorites ORDER BY id";

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to list favorite lists"))?;

        let mut lists = Vec::with_capacity(rows.len());
        for row in &rows {
            lists.push(self.row_to_list(row).await?);
        }
        Ok(lists)
    }

    async fn create(&self, list: FavoriteList) -> Result<FavoriteList, DomainError> {
        let query = "INSERT INTO favorites (id, client_id) VALUES (?, ?)";

        sqlx::query(query)
            .bind(list.id.to_string())
            .bind(list.client_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // Unique index on client_id: a concurrent second create
                // loses the race here.
                if is_duplicate_key(&e) {
                    DomainError::Favorites(FavoritesError::DuplicateList)
                } else {
                    map_query_error(e, "Failed to create favorite list")
                }
            })?;

        Ok(list)
    }

    async fn add_product(&self, list_id: Uuid, product_id: Uuid) -> Result<bool, DomainError> {
        let query = "INSERT INTO favorite_products (favorite_id, product_id) VALUES (?, ?)";

        let result = sqlx::query(query)
            .bind(list_id.to_string())
            .bind(product_id.to_string())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(true),
            // Composite PK: the membership row already exists.
            Err(e) if is_duplicate_key(&e) => Ok(false),
            Err(e) => Err(map_query_error(e, "Failed to add product to list")),
        }
    }

    async fn remove_product(&self, list_id: Uuid, product_id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM favorite_products WHERE favorite_id = ? AND product_id = ?";

        let result = sqlx::query(query)
            .bind(list_id.to_string())
            .bind(product_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to remove product from list"))?;

        Ok(result.rows_affected() > 0)
    }
}
