//! Integration tests for the favorites endpoints

use actix_web::{http::header, test, web};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use fh_api::app::{create_app, AppState};
use fh_core::domain::entities::client::Client;
use fh_core::domain::entities::product::Product;
use fh_core::repositories::{
    ClientRepository, MockAuditRepository, MockClientRepository, MockFavoriteRepository,
    MockProductRepository, MockTokenRepository, MockUserRepository, ProductRepository,
};
use fh_core::services::{
    AuditService, AuthService, AuthServiceConfig, CatalogService, FavoritesService, TokenService,
    TokenServiceConfig,
};

type TestState = AppState<
    MockUserRepository,
    MockTokenRepository,
    MockClientRepository,
    MockProductRepository,
    MockFavoriteRepository,
    MockAuditRepository,
>;

struct TestContext {
    state: web::Data<TestState>,
    access: String,
    client_id: Uuid,
    product_id: Uuid,
}

/// State with one seeded client and product, plus a Bearer token
async fn setup() -> TestContext {
    let user_repo = Arc::new(MockUserRepository::new());
    let client_repo = Arc::new(MockClientRepository::new());
    let product_repo = Arc::new(MockProductRepository::new());
    let favorite_repo = Arc::new(MockFavoriteRepository::new());
    let audit_repo = Arc::new(MockAuditRepository::new());

    let client = client_repo
        .create(Client::new(
            "buyer@example.com".to_string(),
            "Buyer".to_string(),
        ))
        .await
        .unwrap();
    let product = product_repo
        .create(Product::new(
            "Desk Lamp".to_string(),
            String::new(),
            Decimal::new(2450, 2),
        ))
        .await
        .unwrap();

    let token_service = Arc::new(TokenService::new(
        MockTokenRepository::new(),
        TokenServiceConfig::with_secret("test_secret"),
    ));
    let audit_service = Arc::new(AuditService::new(audit_repo));
    let auth_service = Arc::new(AuthService::new(
        user_repo,
        token_service.clone(),
        AuthServiceConfig::for_testing(),
    ));
    let catalog_service = Arc::new(CatalogService::new(
        client_repo.clone(),
        product_repo.clone(),
        audit_service.clone(),
    ));
    let favorites_service = Arc::new(FavoritesService::new(
        favorite_repo,
        client_repo,
        product_repo,
        audit_service,
    ));

    let access = token_service
        .issue_access_token(Uuid::new_v4(), "staff@example.com".to_string())
        .unwrap();

    TestContext {
        state: web::Data::new(AppState {
            auth_service,
            token_service,
            catalog_service,
            favorites_service,
        }),
        access,
        client_id: client.id,
        product_id: product.id,
    }
}

fn bearer(access: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", access))
}

#[actix_web::test]
async fn test_create_list_and_duplicate() {
    let ctx = setup().await;
    let app = test::init_service(create_app(ctx.state)).await;

    let req = test::TestRequest::post()
        .uri("/api/favorites/")
        .insert_header(bearer(&ctx.access))
        .set_json(serde_json::json!({ "client_id": ctx.client_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["client_id"], ctx.client_id.to_string());
    assert_eq!(body["product_ids"].as_array().unwrap().len(), 0);

    // One list per client
    let req = test::TestRequest::post()
        .uri("/api/favorites/")
        .insert_header(bearer(&ctx.access))
        .set_json(serde_json::json!({ "client_id": ctx.client_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Client already has a favorite list.");
}

#[actix_web::test]
async fn test_create_list_for_unknown_client() {
    let ctx = setup().await;
    let app = test::init_service(create_app(ctx.state)).await;

    let req = test::TestRequest::post()
        .uri("/api/favorites/")
        .insert_header(bearer(&ctx.access))
        .set_json(serde_json::json!({ "client_id": Uuid::new_v4() }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Client does not exist");
}

#[actix_web::test]
async fn test_add_and_remove_product() {
    let ctx = setup().await;
    let app = test::init_service(create_app(ctx.state)).await;

    let req = test::TestRequest::post()
        .uri("/api/favorites/")
        .insert_header(bearer(&ctx.access))
        .set_json(serde_json::json!({ "client_id": ctx.client_id }))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let list_id = body["id"].as_str().unwrap().to_string();

    // Add
    let req = test::TestRequest::post()
        .uri(&format!("/api/favorites/{}/add_product/", list_id))
        .insert_header(bearer(&ctx.access))
        .set_json(serde_json::json!({ "product_id": ctx.product_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "product added");

    // Duplicate add fails without mutating the set
    let req = test::TestRequest::post()
        .uri(&format!("/api/favorites/{}/add_product/", list_id))
        .insert_header(bearer(&ctx.access))
        .set_json(serde_json::json!({ "product_id": ctx.product_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Product already in the favorite list");

    // Remove round-trips the membership
    let req = test::TestRequest::post()
        .uri(&format!("/api/favorites/{}/remove_product/", list_id))
        .insert_header(bearer(&ctx.access))
        .set_json(serde_json::json!({ "product_id": ctx.product_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "product removed");

    // Second remove is a client error
    let req = test::TestRequest::post()
        .uri(&format!("/api/favorites/{}/remove_product/", list_id))
        .insert_header(bearer(&ctx.access))
        .set_json(serde_json::json!({ "product_id": ctx.product_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Product not in the favorite list.");
}

#[actix_web::test]
async fn test_add_unknown_product() {
    let ctx = setup().await;
    let app = test::init_service(create_app(ctx.state)).await;

    let req = test::TestRequest::post()
        .uri("/api/favorites/")
        .insert_header(bearer(&ctx.access))
        .set_json(serde_json::json!({ "client_id": ctx.client_id }))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let list_id = body["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/favorites/{}/add_product/", list_id))
        .insert_header(bearer(&ctx.access))
        .set_json(serde_json::json!({ "product_id": Uuid::new_v4() }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Product does not exist");
}

#[actix_web::test]
async fn test_favorites_require_auth() {
    let ctx = setup().await;
    let app = test::init_service(create_app(ctx.state)).await;

    let req = test::TestRequest::get().uri("/api/favorites/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}
