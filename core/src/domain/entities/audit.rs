//! Audit record entity for the append-only change history of tracked
//! catalog entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// The kind of entity an audit record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Client,
    Product,
    Favorite,
}

impl EntityType {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Product => "product",
            Self::Favorite => "favorite",
        }
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "client" => Some(Self::Client),
            "product" => Some(Self::Product),
            "favorite" => Some(Self::Favorite),
            _ => None,
        }
    }
}

/// The kind of mutation an audit record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Create,
    Update,
    Delete,
}

impl ChangeType {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// One append-only entry in an entity's change history.
///
/// The snapshot holds the entity's field values at the time the record was
/// written; consecutive snapshots are diffed to report field changes.
/// Records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Kind of entity this record describes
    pub entity_type: EntityType,

    /// Identifier of the described entity
    pub entity_id: Uuid,

    /// Kind of mutation
    pub change_type: ChangeType,

    /// Who performed the mutation, when known (authenticated user's email)
    pub actor: Option<String>,

    /// Entity field values at record time, as a JSON object
    pub snapshot: JsonValue,

    /// Timestamp when the mutation happened
    pub created_at: DateTime<Utc>,
}

impl AuditRecord {
    /// Creates a new audit record
    pub fn new(
        entity_type: EntityType,
        entity_id: Uuid,
        change_type: ChangeType,
        snapshot: JsonValue,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type,
            entity_id,
            change_type,
            actor: None,
            snapshot,
            created_at: Utc::now(),
        }
    }

    /// Attach the acting user to the record
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}
