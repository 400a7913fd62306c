use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use fh_api::app::{create_app, AppState};
use fh_core::services::{
    AuditService, AuthService, AuthServiceConfig, CatalogService, FavoritesService, TokenService,
    TokenServiceConfig,
};
use fh_infra::{
    DatabasePool, MySqlAuditRepository, MySqlClientRepository, MySqlFavoriteRepository,
    MySqlProductRepository, MySqlTokenRepository, MySqlUserRepository,
};
use fh_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting FavoriteHub API server");

    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the default development secret");
    }

    let pool = DatabasePool::new(config.database.clone()).await?;
    info!("Database pool ready: {}", pool.get_statistics());

    let db = pool.get_pool().clone();

    let user_repository = Arc::new(MySqlUserRepository::new(db.clone()));
    let client_repository = Arc::new(MySqlClientRepository::new(db.clone()));
    let product_repository = Arc::new(MySqlProductRepository::new(db.clone()));
    let favorite_repository = Arc::new(MySqlFavoriteRepository::new(db.clone()));
    let audit_repository = Arc::new(MySqlAuditRepository::new(db.clone()));

    let token_config = TokenServiceConfig {
        jwt_secret: config.jwt.secret.clone(),
        issuer: config.jwt.issuer.clone(),
        audience: config.jwt.audience.clone(),
        access_token_expiry_minutes: config.jwt.access_token_expiry / 60,
        refresh_token_expiry_days: config.jwt.refresh_token_expiry / 86_400,
    };
    let token_service = Arc::new(TokenService::new(
        MySqlTokenRepository::new(db.clone()),
        token_config,
    ));

    let audit_service = Arc::new(AuditService::new(audit_repository));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service.clone(),
        AuthServiceConfig::default(),
    ));
    let catalog_service = Arc::new(CatalogService::new(
        client_repository.clone(),
        product_repository.clone(),
        audit_service.clone(),
    ));
    let favorites_service = Arc::new(FavoritesService::new(
        favorite_repository,
        client_repository,
        product_repository,
        audit_service,
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        token_service,
        catalog_service,
        favorites_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    Ok(())
}
