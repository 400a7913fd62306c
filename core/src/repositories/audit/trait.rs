//! Audit record repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::audit::{AuditRecord, EntityType};
use crate::errors::DomainError;

/// Repository trait for append-only audit record persistence
///
/// Records are never updated or deleted; the log only grows.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Append a record to the log
    async fn append(&self, record: AuditRecord) -> Result<AuditRecord, DomainError>;

    /// Fetch the records for one entity, newest first
    async fn find_by_entity(
        &self,
        entity_type: EntityType,
        entity_id: Uuid,
    ) -> Result<Vec<AuditRecord>, DomainError>;
}
