use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::{RefreshTokenRequest, RefreshTokenResponse};
use crate::handlers::error::handle_domain_error;

use fh_core::repositories::{
    AuditRepository, ClientRepository, FavoriteRepository, ProductRepository, TokenRepository,
    UserRepository,
};

/// Handler for POST /api/auth/token/refresh/
///
/// Exchanges a valid refresh token for a fresh access token. The stored
/// revocation flag is checked on every exchange.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "access": "..." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: unknown, expired, or revoked refresh token
pub async fn refresh<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ClientRepository + 'static,
    P: ProductRepository + 'static,
    F: FavoriteRepository + 'static,
    A: AuditRepository + 'static,
{
    match state
        .auth_service
        .refresh_access_token(&request.refresh)
        .await
    {
        Ok(access) => HttpResponse::Ok().json(RefreshTokenResponse { access }),
        Err(error) => handle_domain_error(&error),
    }
}
