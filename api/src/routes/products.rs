//! Product route handlers.
//!
//! Product payloads carry the derived `average_rating` (a number, or null
//! when the product has no reviews yet).

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::product::{CreateProductRequest, ProductResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

use fh_core::repositories::{
    AuditRepository, ClientRepository, FavoriteRepository, ProductRepository, TokenRepository,
    UserRepository,
};

/// Handler for GET /api/products/
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
    match state.catalog_service.list_products().await {
        Ok(products) => {
            let payload: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            HttpResponse::Ok().json(payload)
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/products/
pub async fn create<U, T, C, P, F, A>(
    state: web::Data<AppState<U, T, C, P, F, A>>,
    auth: AuthContext,
    request: web::Json<CreateProductRequest>,
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
        .create_product(
            &request.title,
            &request.image_url,
            request.price,
            Some(auth.email),
        )
        .await
    {
        // A new product has no reviews, so the rating is null
        Ok(product) => HttpResponse::Created().json(ProductResponse::without_rating(product)),
        Err(error) => handle_domain_error(&error),
    }
}
