//! Favorites route handlers.
//!
//! One list per client; membership mutations report a fixed status
//! string on success and a `{"error": ...}` payload on failure.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::favorite::{CreateFavoriteRequest, ProductMembershipRequest, StatusResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use fh_core::repositories::{
    AuditRepository, ClientRepository, FavoriteRepository, ProductRepository, TokenRepository,
    UserRepository,
};

/// Handler for GET /api/favorites/
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
    match state.favorites_service.list().await {
        Ok(lists) => HttpResponse::Ok().json(lists),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/favorites/
///
/// Creates an empty list for a client. A second list for the same client
/// → 400 "Client already has a favorite list."
pub async fn create<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    auth: AuthContext,
    request: web::Json<CreateFavoriteRequest>,
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
        .favorites_service
        .create_list(request.client_id, Some(auth.email))
        .await
    {
        Ok(list) => HttpResponse::Created().json(list),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/favorites/{id}/add_product/
pub async fn add_product<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<ProductMembershipRequest>,
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
        .favorites_service
        .add_product(path.into_inner(), request.product_id, Some(auth.email))
        .await
    {
        Ok(_) => HttpResponse::Ok().json(StatusResponse::new("product added")),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/favorites/{id}/remove_product/
pub async fn remove_product<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<ProductMembershipRequest>,
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
        .favorites_service
        .remove_product(path.into_inner(), request.product_id, Some(auth.email))
        .await
    {
        Ok(_) => HttpResponse::Ok().json(StatusResponse::new("product removed")),
        Err(error) => handle_domain_error(&error),
    }
}
