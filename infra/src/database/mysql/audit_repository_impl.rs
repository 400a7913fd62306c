//! MySQL implementation of the AuditRepository trait.
//!
//! The `audit_records` table is append-only; rows are never updated or
//! deleted. Snapshots are stored as JSON.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use fh_core::domain::entities::audit::{AuditRecord, ChangeType, EntityType};
use fh_core::errors::DomainError;
use fh_core::repositories::AuditRepository;

use super::{map_query_error, parse_uuid};

/// MySQL implementation of AuditRepository
pub struct MySqlAuditRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAuditRepository {
    /// Create a new MySQL audit repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to AuditRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<AuditRecord, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let entity_id: String = row
            .try_get("entity_id")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get entity_id: {}", e),
            })?;
        let entity_type: String = row
            .try_get("entity_type")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get entity_type: {}", e),
            })?;
        let change_type: String = row
            .try_get("change_type")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get change_type: {}", e),
            })?;
        let snapshot: String = row
            .try_get("snapshot")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get snapshot: {}", e),
            })?;

        Ok(AuditRecord {
            id: parse_uuid(&id, "id")?,
            entity_type: EntityType::parse(&entity_type).ok_or_else(|| {
                DomainError::Internal {
                    message: format!("Unknown entity_type: {}", entity_type),
                }
            })?,
            entity_id: parse_uuid(&entity_id, "entity_id")?,
            change_type: ChangeType::parse(&change_type).ok_or_else(|| {
                DomainError::Internal {
                    message: format!("Unknown change_type: {}", change_type),
                }
            })?,
            actor: row.try_get("actor").map_err(|e| DomainError::Internal {
                message: format!("Failed to get actor: {}", e),
            })?,
            snapshot: serde_json::from_str::<JsonValue>(&snapshot).map_err(|e| {
                DomainError::Internal {
                    message: format!("Invalid snapshot JSON: {}", e),
                }
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
impl AuditRepository for MySqlAuditRepository {
    async fn append(&self, record: AuditRecord) -> Result<AuditRecord, DomainError> {
        let query = r#"
            INSERT INTO audit_records (
                id, entity_type, entity_id, change_type, actor, snapshot, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let snapshot = serde_json::to_string(&record.snapshot).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to serialize snapshot: {}", e),
            }
        })?;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(record.entity_type.as_str())
            .bind(record.entity_id.to_string())
            .bind(record.change_type.as_str())
            .bind(&record.actor)
            .bind(snapshot)
            .bind(record.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to append audit record"))?;

        Ok(record)
    }

    async fn find_by_entity(
        &self,
        entity_type: EntityType,
        entity_id: Uuid,
    ) -> Result<Vec<AuditRecord>, DomainError> {
        let query = r#"
            SELECT id, entity_type, entity_id, change_type, actor, snapshot, created_at
            FROM audit_records
            WHERE entity_type = ? AND entity_id = ?
            ORDER BY created_at DESC, id DESC
        "#;

        let rows = sqlx::query(query)
            .bind(entity_type.as_str())
            .bind(entity_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Failed to fetch audit history"))?;

        rows.iter().map(Self::row_to_record).collect()
    }
}
