//! Client CRUD route handlers.
//!
//! All endpoints require authentication; the caller's email is recorded
//! as the audit actor on mutations.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::client::{CreateClientRequest, UpdateClientRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

use fh_core::repositories::{
    AuditRepository, ClientRepository, FavoriteRepository, ProductRepository, TokenRepository,
    UserRepository,
};
use fh_core::services::catalog::ClientUpdate;

/// Handler for GET /api/clients/
pub async fn list<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    _auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ClientRepository + 'static,
    P: ProductRepository + 'static,
    F: FavoriteRepository + 'static,
    A: AuditRepository + 'static,
{
    match state.catalog_service.list_clients().await {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/clients/
///
/// Duplicate email → 400 with a field-keyed payload.
pub async fn create<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    auth: AuthContext,
    request: web::Json<CreateClientRequest>,
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
        .catalog_service
        .create_client(&request.email, &request.name, Some(auth.email))
        .await
    {
        Ok(client) => HttpResponse::Created().json(client),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/clients/{id}/
pub async fn get<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    _auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ClientRepository + 'static,
    P: ProductRepository + 'static,
    F: FavoriteRepository + 'static,
    A: AuditRepository + 'static,
{
    match state.catalog_service.get_client(path.into_inner()).await {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PATCH /api/clients/{id}/
///
/// Partial update: only the provided fields change.
pub async fn update<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateClientRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ClientRepository + 'static,
    P: ProductRepository + 'static,
    F: FavoriteRepository + 'static,
    A: AuditRepository + 'static,
{
    let update = ClientUpdate {
        email: request.0.email,
        name: request.0.name,
    };

    match state
        .catalog_service
        .update_client(path.into_inner(), update, Some(auth.email))
        .await
    {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /api/clients/{id}/
pub async fn delete<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
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
        .catalog_service
        .delete_client(path.into_inner(), Some(auth.email))
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
