use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use fh_core::repositories::{
    AuditRepository, ClientRepository, FavoriteRepository, ProductRepository, TokenRepository,
    UserRepository,
};

/// Handler for POST /api/auth/register/
///
/// Creates a user account and issues its first token pair.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "tokens": { "access": "...", "refresh": "..." }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed input, or email already registered
///   (`{"email": "A user with this email already exists."}`)
pub async fn register<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    request: web::Json<RegisterRequest>,
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
        .register(&request.email, &request.password)
        .await
    {
        Ok(tokens) => HttpResponse::Created().json(RegisterResponse {
            tokens: tokens.into(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
