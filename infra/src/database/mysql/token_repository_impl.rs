//! MySQL implementation of the TokenRepository trait.
//!
//! Stores refresh tokens by SHA-256 hash only; revocation is a single
//! conditional UPDATE so a token can be revoked exactly once.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use fh_core::domain::entities::token::RefreshToken;
use fh_core::errors::DomainError;
use fh_core::repositories::TokenRepository;

use super::{is_duplicate_key, map_query_error, parse_uuid};

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(RefreshToken {
            id: parse_uuid(&id, "id")?,
            user_id: parse_uuid(&user_id, "user_id")?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get token_hash: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
            is_revoked: row
                .try_get("is_revoked")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get is_revoked: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, user_id, token_hash, created_at, expires_at, is_revoked
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token_hash)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.is_revoked)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    DomainError::Conflict {
                        message: "Token already exists".to_string(),
                    }
                } else {
                    map_query_error(e, "Failed to save refresh token")
                }
            })?;

        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at, is_revoked
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to find refresh token"))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        // The guards make revocation single-shot and reject expired tokens:
        // a repeated call or a stale token affects zero rows.
        let query = r#"
            UPDATE refresh_tokens
            SET is_revoked = TRUE
            WHERE token_hash = ? AND is_revoked = FALSE AND expires_at > ?
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to revoke token"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        let query = r#"
            DELETE FROM refresh_tokens
            WHERE expires_at < ?
               OR (is_revoked = TRUE AND created_at < DATE_SUB(?, INTERVAL 30 DAY))
        "#;

        let now = Utc::now();
        let result = sqlx::query(query)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to delete expired tokens"))?;

        Ok(result.rows_affected() as usize)
    }
}
