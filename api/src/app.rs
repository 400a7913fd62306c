//! Application state and factory
//!
//! This module holds the shared service state and provides the factory
//! for creating the Actix-web application with all routes wired up.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{auth::JwtAuth, auth::TokenServiceWrapper, cors::create_cors};
use crate::routes::auth::{login, logout, refresh, register};
use crate::routes::{clients, favorites, products};

use fh_core::repositories::{
    AuditRepository, ClientRepository, FavoriteRepository, ProductRepository, TokenRepository,
    UserRepository,
};
use fh_core::services::{AuthService, CatalogService, FavoritesService, TokenService};

/// Application state that holds shared services
pub struct AppState<U, T, C, P, F, A>
where
    U: UserRepository,
    T: TokenRepository,
    C: ClientRepository,
    P: ProductRepository,
    F: FavoriteRepository,
    A: AuditRepository + 'static,
{
    pub auth_service: Arc<AuthService<U, T>>,
    pub token_service: Arc<TokenService<T>>,
    pub catalog_service: Arc<CatalogService<C, P, A>>,
    pub favorites_service: Arc<FavoritesService<F, C, P, A>>,
}

/// Create and configure the application with all dependencies
pub fn create_app<U, T, C, P, F, A>(
    app_state: web::Data<AppState<U, T, C, P, F, A>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ClientRepository + 'static,
    P: ProductRepository + 'static,
    F: FavoriteRepository + 'static,
    A: AuditRepository + 'static,
{
    // The JWT middleware verifies access tokens through this type-erased
    // handle so it does not need the state's type parameters.
    let token_wrapper: Arc<dyn TokenServiceWrapper> = app_state.token_service.clone();

    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(web::Data::new(token_wrapper))
        .wrap(Logger::default())
        .wrap(cors)
        // Unauthenticated liveness probe
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register/", web::post().to(register::<U, T, C, P, F, A>))
                        .route("/login/", web::post().to(login::<U, T, C, P, F, A>))
                        .route(
                            "/logout/",
                            web::post()
                                .to(logout::<U, T, C, P, F, A>)
                                .wrap(JwtAuth::new()),
                        )
                        .route(
                            "/token/refresh/",
                            web::post().to(refresh::<U, T, C, P, F, A>),
                        ),
                )
                .service(
                    web::scope("/clients")
                        .wrap(JwtAuth::new())
                        .route("/", web::get().to(clients::list::<U, T, C, P, F, A>))
                        .route("/", web::post().to(clients::create::<U, T, C, P, F, A>))
                        .route("/{id}/", web::get().to(clients::get::<U, T, C, P, F, A>))
                        .route(
                            "/{id}/",
                            web::patch().to(clients::update::<U, T, C, P, F, A>),
                        )
                        .route(
                            "/{id}/",
                            web::delete().to(clients::delete::<U, T, C, P, F, A>),
                        ),
                )
                .service(
                    web::scope("/products")
                        .wrap(JwtAuth::new())
                        .route("/", web::get().to(products::list::<U, T, C, P, F, A>))
                        .route("/", web::post().to(products::create::<U, T, C, P, F, A>)),
                )
                .service(
                    web::scope("/favorites")
                        .wrap(JwtAuth::new())
                        .route("/", web::get().to(favorites::list::<U, T, C, P, F, A>))
                        .route("/", web::post().to(favorites::create::<U, T, C, P, F, A>))
                        .route(
                            "/{id}/add_product/",
                            web::post().to(favorites::add_product::<U, T, C, P, F, A>),
                        )
                        .route(
                            "/{id}/remove_product/",
                            web::post().to(favorites::remove_product::<U, T, C, P, F, A>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "favoritehub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "detail": "The requested resource was not found",
    }))
}
