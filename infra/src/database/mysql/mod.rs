//! MySQL repository implementations
//!
//! Each repository maps its table rows to `fh_core` domain entities and
//! translates SQLx errors into the domain error taxonomy. Uniqueness rules
//! (user email, client email, one favorite list per client, list
//! membership) are carried by database constraints; duplicate-key failures
//! are mapped to the matching domain conflict.

mod audit_repository_impl;
mod client_repository_impl;
mod favorite_repository_impl;
mod product_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use audit_repository_impl::MySqlAuditRepository;
pub use client_repository_impl::MySqlClientRepository;
pub use favorite_repository_impl::MySqlFavoriteRepository;
pub use product_repository_impl::MySqlProductRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use fh_core::errors::DomainError;

/// Translate a SQLx error into the domain taxonomy
///
/// Pool exhaustion and connection failures become `Storage` (transient,
/// retryable); everything else is `Internal`. Duplicate-key violations are
/// handled by the callers that expect them, via [`is_duplicate_key`].
pub(crate) fn map_query_error(e: sqlx::Error, context: &str) -> DomainError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DomainError::Storage {
                message: format!("{}: {}", context, e),
            }
        }
        other => DomainError::Internal {
            message: format!("{}: {}", context, other),
        },
    }
}

/// Whether an error is a MySQL duplicate-key violation (error 1062)
pub(crate) fn is_duplicate_key(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => {
            db.is_unique_violation() || db.code().as_deref() == Some("1062")
        }
        _ => false,
    }
}

/// Parse a UUID column value, surfacing corruption as an internal error
pub(crate) fn parse_uuid(value: &str, column: &str) -> Result<uuid::Uuid, DomainError> {
    uuid::Uuid::parse_str(value).map_err(|e| DomainError::Internal {
        message: format!("Invalid UUID in column {}: {}", column, e),
    })
}
