//! Request bodies for the client endpoints.
//!
//! Client responses serialize the `Client` entity directly.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
}

/// PATCH body: absent fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClientRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}
