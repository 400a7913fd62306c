//! Client entity for the catalog store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client of the store. Independent of `User`; clients are catalog data,
/// not login accounts. Each client may own at most one favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier for the client
    pub id: Uuid,

    /// Unique email address
    pub email: String,

    /// Display name
    pub name: String,
}

impl Client {
    /// Creates a new client
    pub fn new(email: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
        }
    }
}
