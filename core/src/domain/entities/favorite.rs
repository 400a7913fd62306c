//! Favorites list entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client's favorites list.
///
/// Each client owns at most one list (enforced by a storage-level unique
/// constraint on `client_id`). The product membership has set semantics:
/// a product appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteList {
    /// Unique identifier for the list
    pub id: Uuid,

    /// Owning client; one list per client
    pub client_id: Uuid,

    /// Member product ids, no duplicates
    pub product_ids: Vec<Uuid>,
}

impl FavoriteList {
    /// Creates an empty favorites list for a client
    pub fn new(client_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            product_ids: Vec::new(),
        }
    }

    /// Checks whether a product is a member of the list
    pub fn contains(&self, product_id: Uuid) -> bool {
        self.product_ids.contains(&product_id)
    }

    /// Adds a product id, returning false when already present
    pub fn add(&mut self, product_id: Uuid) -> bool {
        if self.contains(product_id) {
            return false;
        }
        self.product_ids.push(product_id);
        true
    }

    /// Removes a product id, returning false when absent
    pub fn remove(&mut self, product_id: Uuid) -> bool {
        let before = self.product_ids.len();
        self.product_ids.retain(|id| *id != product_id);
        self.product_ids.len() != before
    }
}
