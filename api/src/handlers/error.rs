//! Maps domain errors to HTTP responses.
//!
//! Every variant gets a fixed status and payload shape. Internal and
//! storage failures are logged here and never leak their message.

use actix_web::HttpResponse;
use serde_json::json;
use validator::ValidationErrors;

use fh_core::errors::{AuthError, DomainError, ValidationError};

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        // Register collision keeps its field-keyed payload shape
        DomainError::Auth(AuthError::EmailAlreadyExists) => {
            HttpResponse::BadRequest().json(json!({
                "email": error.to_string(),
            }))
        }

        DomainError::Auth(e) => HttpResponse::Unauthorized().json(json!({
            "detail": e.to_string(),
        })),

        DomainError::Token(e) => HttpResponse::Unauthorized().json(json!({
            "detail": e.to_string(),
        })),

        // Favorites consistency failures are all client errors
        DomainError::Favorites(e) => HttpResponse::BadRequest().json(json!({
            "error": e.to_string(),
        })),

        DomainError::ValidationErr(ValidationError::DuplicateValue { field }) => {
            let mut body = serde_json::Map::new();
            body.insert(
                field.clone(),
                json!(format!("A record with this {} already exists.", field)),
            );
            HttpResponse::BadRequest().json(body)
        }

        DomainError::ValidationErr(e) => HttpResponse::BadRequest().json(json!({
            "detail": e.to_string(),
        })),

        DomainError::Validation { message } => HttpResponse::BadRequest().json(json!({
            "detail": message,
        })),

        DomainError::NotFound { resource } => HttpResponse::NotFound().json(json!({
            "detail": format!("{} not found", resource),
        })),

        DomainError::Conflict { message } => HttpResponse::BadRequest().json(json!({
            "detail": message,
        })),

        DomainError::Storage { message } => {
            log::error!("Storage unavailable: {}", message);
            HttpResponse::ServiceUnavailable().json(json!({
                "detail": "Service temporarily unavailable, please retry",
            }))
        }

        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(json!({
                "detail": "Internal server error",
            }))
        }
    }
}

/// Convert request DTO validation failures into a field-keyed 400 payload
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut body = serde_json::Map::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        body.insert(field.to_string(), json!(messages));
    }
    HttpResponse::BadRequest().json(body)
}
