//! Request and response bodies for the favorites endpoints.
//!
//! List responses serialize the `FavoriteList` entity directly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFavoriteRequest {
    pub client_id: Uuid,
}

/// Body for add_product / remove_product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMembershipRequest {
    pub product_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
