//! Audit service for recording entity changes and querying history.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::entities::audit::{AuditRecord, ChangeType, EntityType};
use crate::errors::DomainResult;
use crate::repositories::AuditRepository;

/// A single field whose value changed between two consecutive records
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub field: String,
    pub old_value: JsonValue,
    pub new_value: JsonValue,
}

/// The field-level diff for one history entry against its predecessor
#[derive(Debug, Clone)]
pub struct ChangeSet {
    pub created_at: DateTime<Utc>,
    pub change_type: ChangeType,
    pub actor: Option<String>,
    pub changes: Vec<FieldChange>,
}

/// One row of the compact history report
#[derive(Debug, Clone)]
pub struct HistorySummaryRow {
    pub created_at: DateTime<Utc>,
    pub change_type: ChangeType,
    pub actor: Option<String>,
}

/// Service for writing and querying the append-only audit log
pub struct AuditService<R>
where
    R: AuditRepository,
{
    repository: Arc<R>,
}

impl<R> AuditService<R>
where
    R: AuditRepository + 'static,
{
    /// Create a new audit service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Record a change to an entity
    ///
    /// Audit writes never fail the mutation they describe: a storage error
    /// here is logged and swallowed.
    pub async fn record(
        &self,
        entity_type: EntityType,
        entity_id: Uuid,
        change_type: ChangeType,
        actor: Option<String>,
        snapshot: JsonValue,
    ) {
        let mut record = AuditRecord::new(entity_type, entity_id, change_type, snapshot);
        if let Some(actor) = actor {
            record = record.with_actor(actor);
        }

        if let Err(e) = self.repository.append(record).await {
            tracing::error!(
                entity_type = entity_type.as_str(),
                %entity_id,
                error = %e,
                "failed to write audit record"
            );
        }
    }

    /// Fetch the history for one entity, newest first
    ///
    /// `limit` caps the number of records returned; 0 means no cap.
    pub async fn history(
        &self,
        entity_type: EntityType,
        entity_id: Uuid,
        limit: usize,
    ) -> DomainResult<Vec<AuditRecord>> {
        let mut records = self.repository.find_by_entity(entity_type, entity_id).await?;
        if limit > 0 {
            records.truncate(limit);
        }
        Ok(records)
    }

    /// Diff consecutive history entries field by field
    ///
    /// Each returned set describes what a record changed relative to the
    /// record before it, newest first. Only fields whose value differs are
    /// reported; the `id` field is skipped. The oldest record (usually the
    /// create) has no predecessor and produces no set.
    pub async fn field_changes(
        &self,
        entity_type: EntityType,
        entity_id: Uuid,
        limit: usize,
    ) -> DomainResult<Vec<ChangeSet>> {
        let records = self.history(entity_type, entity_id, 0).await?;

        let mut sets = Vec::new();
        // records[i] is newer than records[i + 1]
        for pair in records.windows(2) {
            let (newer, older) = (&pair[0], &pair[1]);
            sets.push(ChangeSet {
                created_at: newer.created_at,
                change_type: newer.change_type,
                actor: newer.actor.clone(),
                changes: diff_snapshots(&older.snapshot, &newer.snapshot),
            });
        }

        if limit > 0 {
            sets.truncate(limit);
        }
        Ok(sets)
    }

    /// Per-record `(created_at, change_type, actor)` rows, newest first
    pub async fn history_summary(
        &self,
        entity_type: EntityType,
        entity_id: Uuid,
        limit: usize,
    ) -> DomainResult<Vec<HistorySummaryRow>> {
        let records = self.history(entity_type, entity_id, limit).await?;
        Ok(records
            .into_iter()
            .map(|r| HistorySummaryRow {
                created_at: r.created_at,
                change_type: r.change_type,
                actor: r.actor,
            })
            .collect())
    }
}

/// Compare two snapshots field by field, skipping the identity field
fn diff_snapshots(old: &JsonValue, new: &JsonValue) -> Vec<FieldChange> {
    let empty = serde_json::Map::new();
    let old_map = old.as_object().unwrap_or(&empty);
    let new_map = new.as_object().unwrap_or(&empty);

    let mut fields: Vec<&String> = old_map.keys().chain(new_map.keys()).collect();
    fields.sort();
    fields.dedup();

    fields
        .into_iter()
        .filter(|f| f.as_str() != "id")
        .filter_map(|field| {
            let old_value = old_map.get(field).cloned().unwrap_or(JsonValue::Null);
            let new_value = new_map.get(field).cloned().unwrap_or(JsonValue::Null);
            if old_value != new_value {
                Some(FieldChange {
                    field: field.clone(),
                    old_value,
                    new_value,
                })
            } else {
                None
            }
        })
        .collect()
}
