//! MySQL implementation of the ClientRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fh_core::domain::entities::client::Client;
use fh_core::errors::{DomainError, ValidationError};
use fh_core::repositories::ClientRepository;

use super::{is_duplicate_key, map_query_error, parse_uuid};

/// MySQL implementation of ClientRepository
///
/// Email uniqueness is enforced by a unique index on `clients.email`.
pub struct MySqlClientRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlClientRepository {
    /// Create a new MySQL client repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Client entity
    fn row_to_client(row: &sqlx::mysql::MySqlRow) -> Result<Client, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Client {
            id: parse_uuid(&id, "id")?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
        })
    }

    fn duplicate_email() -> DomainError {
        DomainError::ValidationErr(ValidationError::DuplicateValue {
            field: "email".to_string(),
        })
    }
}

#[async_trait]
impl ClientRepository for MySqlClientRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DomainError> {
        let query = "SELECT id, email, name FROM clients WHERE id = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to find client"))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_client(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Client>, DomainError> {
        let query = "SELECT id, email, name FROM clients ORDER BY id";

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to list clients"))?;

        rows.iter().map(Self::row_to_client).collect()
    }

    async fn create(&self, client: Client) -> Result<Client, DomainError> {
        let query = "INSERT INTO clients (id, email, name) VALUES (?, ?, ?)";

        sqlx::query(query)
            .bind(client.id.to_string())
            .bind(&client.email)
            .bind(&client.name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    Self::duplicate_email()
                } else {
                    map_query_error(e, "Failed to create client")
                }
            })?;

        Ok(client)
    }

    async fn update(&self, client: Client) -> Result<Client, DomainError> {
        let query = "UPDATE clients SET email = ?, name = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(&client.email)
            .bind(&client.name)
            .bind(client.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    Self::duplicate_email()
                } else {
                    map_query_error(e, "Failed to update client")
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "client".to_string(),
            });
        }

        Ok(client)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM clients WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to delete client"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM clients WHERE email = ?) AS found";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to check client existence"))?;

        let found: i8 = row.try_get("found").map_err(|e| DomainError::Internal {
            message: format!("Failed to get existence result: {}", e),
        })?;

        Ok(found == 1)
    }
}
