//! Integration tests for the client and product endpoints

use actix_web::{http::header, test, web};
use std::sync::Arc;
use uuid::Uuid;

use fh_api::app::{create_app, AppState};
use fh_core::repositories::{
    MockAuditRepository, MockClientRepository, MockFavoriteRepository, MockProductRepository,
    MockTokenRepository, MockUserRepository,
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

type TestCatalog =
    CatalogService<MockClientRepository, MockProductRepository, MockAuditRepository>;

/// State plus a Bearer token for an authenticated caller, and a handle on
/// the catalog service for test fixtures
fn setup() -> (web::Data<TestState>, String, Arc<TestCatalog>) {
    let user_repo = Arc::new(MockUserRepository::new());
    let client_repo = Arc::new(MockClientRepository::new());
    let product_repo = Arc::new(MockProductRepository::new());
    let favorite_repo = Arc::new(MockFavoriteRepository::new());
    let audit_repo = Arc::new(MockAuditRepository::new());

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

    let state = web::Data::new(AppState {
        auth_service,
        token_service,
        catalog_service: catalog_service.clone(),
        favorites_service,
    });

    (state, access, catalog_service)
}

fn bearer(access: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", access))
}

#[actix_web::test]
async fn test_clients_require_auth() {
    let (state, _, _) = setup();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/clients/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_client_crud_round_trip() {
    let (state, access, _) = setup();
    let app = test::init_service(create_app(state)).await;

    // Create
    let req = test::TestRequest::post()
        .uri("/api/clients/")
        .insert_header(bearer(&access))
        .set_json(serde_json::json!({
            "email": "client@example.com",
            "name": "First Client",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["email"], "client@example.com");

    // List includes the new client
    let req = test::TestRequest::get()
        .uri("/api/clients/")
        .insert_header(bearer(&access))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Partial update changes only the name
    let req = test::TestRequest::patch()
        .uri(&format!("/api/clients/{}/", id))
        .insert_header(bearer(&access))
        .set_json(serde_json::json!({ "name": "Renamed Client" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Renamed Client");
    assert_eq!(body["email"], "client@example.com");

    // Delete, then the client is gone
    let req = test::TestRequest::delete()
        .uri(&format!("/api/clients/{}/", id))
        .insert_header(bearer(&access))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/api/clients/{}/", id))
        .insert_header(bearer(&access))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_duplicate_client_email() {
    let (state, access, _) = setup();
    let app = test::init_service(create_app(state)).await;

    for expected_status in [201, 400] {
        let req = test::TestRequest::post()
            .uri("/api/clients/")
            .insert_header(bearer(&access))
            .set_json(serde_json::json!({
                "email": "taken@example.com",
                "name": "Client",
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected_status);

        if expected_status == 400 {
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert!(body.get("email").is_some());
        }
    }
}

#[actix_web::test]
async fn test_unknown_client_is_404() {
    let (state, access, _) = setup();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/clients/{}/", Uuid::new_v4()))
        .insert_header(bearer(&access))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_product_create_and_list() {
    let (state, access, _) = setup();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/products/")
        .insert_header(bearer(&access))
        .set_json(serde_json::json!({
            "title": "Mechanical Keyboard",
            "image_url": "https://img.example.com/kb.png",
            "price": "129.99",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Mechanical Keyboard");
    assert_eq!(body["price"], "129.99");
    // No reviews yet: the rating is null, never zero
    assert!(body["average_rating"].is_null());

    let req = test::TestRequest::get()
        .uri("/api/products/")
        .insert_header(bearer(&access))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_product_average_rating_in_payload() {
    let (state, access, catalog) = setup();
    let app = test::init_service(create_app(state)).await;

    let product = catalog
        .create_product("Rated Product", "", rust_decimal::Decimal::new(999, 2), None)
        .await
        .unwrap();
    catalog.add_review(product.id, 4).await.unwrap();
    catalog.add_review(product.id, 5).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/api/products/")
        .insert_header(bearer(&access))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;

    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["average_rating"], 4.5);
}

#[actix_web::test]
async fn test_product_negative_price_rejected() {
    let (state, access, _) = setup();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/products/")
        .insert_header(bearer(&access))
        .set_json(serde_json::json!({
            "title": "Broken Product",
            "image_url": "",
            "price": "-1.00",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
