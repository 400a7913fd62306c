//! In-memory implementation of AuditRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::audit::{AuditRecord, EntityType};
use crate::errors::DomainError;

use super::r#trait::AuditRepository;

/// Mock audit repository for testing
pub struct MockAuditRepository {
    records: Arc<RwLock<Vec<AuditRecord>>>,
}

impl MockAuditRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Total number of stored records, across all entities
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the log is empty
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for MockAuditRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditRepository for MockAuditRepository {
    async fn append(&self, record: AuditRecord) -> Result<AuditRecord, DomainError> {
        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_entity(
        &self,
        entity_type: EntityType,
        entity_id: Uuid,
    ) -> Result<Vec<AuditRecord>, DomainError> {
        let records = self.records.read().await;
        let mut matching: Vec<AuditRecord> = records
            .iter()
            .filter(|r| r.entity_type == entity_type && r.entity_id == entity_id)
            .cloned()
            .collect();
        // Insertion order is oldest first; callers get newest first.
        matching.reverse();
        Ok(matching)
    }
}
