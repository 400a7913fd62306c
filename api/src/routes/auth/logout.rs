use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::LogoutRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use fh_core::errors::{DomainError, TokenError};
use fh_core::repositories::{
    AuditRepository, ClientRepository, FavoriteRepository, ProductRepository, TokenRepository,
    UserRepository,
};

/// Handler for POST /api/auth/logout/
///
/// Revokes the submitted refresh token, ending that session. Requires
/// authentication via Bearer token in the Authorization header.
///
/// # Response
///
/// ## Success (204 No Content)
///
/// ## Errors
/// - 400 Bad Request: unknown, expired, or already-revoked refresh token
///   (`{"bad_token": "Token is expired or invalid"}`)
/// - 401 Unauthorized: missing or invalid access token
pub async fn logout<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    _auth: AuthContext,
    request: web::Json<LogoutRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ClientRepository + 'static,
    P: ProductRepository + 'static,
    F: FavoriteRepository + 'static,
    A: AuditRepository + 'static,
{
    match state.auth_service.logout(&request.refresh).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        // Logout keeps its own payload shape for token failures
        Err(DomainError::Token(_)) => HttpResponse::BadRequest().json(serde_json::json!({
            "bad_token": TokenError::InvalidRefreshToken.to_string(),
        })),
        Err(error) => handle_domain_error(&error),
    }
}
