use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use fh_core::repositories::{
    AuditRepository, ClientRepository, FavoriteRepository, ProductRepository, TokenRepository,
    UserRepository,
};

/// Handler for POST /api/auth/login/
///
/// Authenticates with email and password and issues a token pair.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "id": "uuid",
///     "email": "user@example.com",
///     "tokens": { "access": "...", "refresh": "..." }
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: unknown email, wrong password, disabled or
///   unverified account (`{"detail": ...}`)
pub async fn login<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ClientRepository + 'static,
    P: ProductRepository + 'static,
    F: FavoriteRepository + 'static,
    A: AuditRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(LoginResponse::from(result)),
        Err(error) => handle_domain_error(&error),
    }
}
