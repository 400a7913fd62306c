//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fh_core::domain::entities::user::User;
use fh_core::errors::{AuthError, DomainError};
use fh_core::repositories::UserRepository;

use super::{is_duplicate_key, map_query_error, parse_uuid};

/// MySQL implementation of UserRepository
///
/// Email uniqueness is enforced by a unique index on `users.email`; a
/// duplicate insert maps to `AuthError::EmailAlreadyExists`.
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(User {
            id: parse_uuid(&id, "id")?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            is_active: row.try_get("is_active").map_err(|e| DomainError::Internal {
                message: format!("Failed to get is_active: {}", e),
            })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get is_verified: {}", e),
                })?,
            is_staff: row.try_get("is_staff").map_err(|e| DomainError::Internal {
                message: format!("Failed to get is_staff: {}", e),
            })?,
            is_superuser: row
                .try_get("is_superuser")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get is_superuser: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, is_active, is_verified,
                   is_staff, is_superuser, created_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to find user by email"))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, is_active, is_verified,
                   is_staff, is_superuser, created_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to find user by id"))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, password_hash, is_active, is_verified,
                is_staff, is_superuser, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.is_verified)
            .bind(user.is_staff)
            .bind(user.is_superuser)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    DomainError::Auth(AuthError::EmailAlreadyExists)
                } else {
                    map_query_error(e, "Failed to create user")
                }
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET email = ?, password_hash = ?, is_active = ?, is_verified = ?,
                is_staff = ?, is_superuser = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.is_verified)
            .bind(user.is_staff)
            .bind(user.is_superuser)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    DomainError::Auth(AuthError::EmailAlreadyExists)
                } else {
                    map_query_error(e, "Failed to update user")
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Auth(AuthError::UserNotFound));
        }

        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS found";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to check user existence"))?;

        let found: i8 = row.try_get("found").map_err(|e| DomainError::Internal {
            message: format!("Failed to get existence result: {}", e),
        })?;

        Ok(found == 1)
    }
}
