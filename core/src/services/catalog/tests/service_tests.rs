//! Unit tests for the catalog service

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::audit::{ChangeType, EntityType};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{
    MockAuditRepository, MockClientRepository, MockProductRepository,
};
use crate::services::audit::AuditService;
use crate::services::catalog::{CatalogService, ClientUpdate};

type TestCatalogService =
    CatalogService<MockClientRepository, MockProductRepository, MockAuditRepository>;

fn create_test_service() -> (TestCatalogService, Arc<AuditService<MockAuditRepository>>) {
    let audit_service = Arc::new(AuditService::new(Arc::new(MockAuditRepository::new())));
    let service = CatalogService::new(
        Arc::new(MockClientRepository::new()),
        Arc::new(MockProductRepository::new()),
        Arc::clone(&audit_service),
    );
    (service, audit_service)
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_client_crud_round_trip() {
    let (service, _) = create_test_service();

    let client = service
        .create_client("client@example.com", "Client One", None)
        .await
        .unwrap();
    assert_eq!(client.email, "client@example.com");

    let updated = service
        .update_client(
            client.id,
            ClientUpdate {
                name: Some("Renamed".to_string()),
                email: None,
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, "client@example.com");

    service.delete_client(client.id, None).await.unwrap();
    let err = service.get_client(client.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_create_client_normalizes_email() {
    let (service, _) = create_test_service();

    let client = service
        .create_client("  Client@Example.COM ", "One", None)
        .await
        .unwrap();
    assert_eq!(client.email, "client@example.com");
}

#[tokio::test]
async fn test_duplicate_client_email_rejected() {
    let (service, _) = create_test_service();

    service
        .create_client("client@example.com", "One", None)
        .await
        .unwrap();
    let err = service
        .create_client("client@example.com", "Two", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::DuplicateValue { .. })
    ));
}

#[tokio::test]
async fn test_client_mutations_are_audited() {
    let (service, audit_service) = create_test_service();

    let client = service
        .create_client(
            "client@example.com",
            "One",
            Some("admin@example.com".to_string()),
        )
        .await
        .unwrap();
    service
        .update_client(
            client.id,
            ClientUpdate {
                name: Some("Two".to_string()),
                email: None,
            },
            Some("admin@example.com".to_string()),
        )
        .await
        .unwrap();
    service
        .delete_client(client.id, Some("admin@example.com".to_string()))
        .await
        .unwrap();

    let history = audit_service
        .history(EntityType::Client, client.id, 0)
        .await
        .unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].change_type, ChangeType::Delete);
    assert_eq!(history[1].change_type, ChangeType::Update);
    assert_eq!(history[2].change_type, ChangeType::Create);
    assert_eq!(history[0].actor.as_deref(), Some("admin@example.com"));
}

#[tokio::test]
async fn test_update_unknown_client() {
    let (service, _) = create_test_service();

    let err = service
        .update_client(Uuid::new_v4(), ClientUpdate::default(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_create_product_preserves_price() {
    let (service, _) = create_test_service();

    let product = service
        .create_product("Widget", "https://img.example.com/w.png", dec("19.99"), None)
        .await
        .unwrap();
    assert_eq!(product.price, dec("19.99"));

    let listed = service.list_products().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].product.price, dec("19.99"));
}

#[tokio::test]
async fn test_create_product_rejects_negative_price() {
    let (service, _) = create_test_service();

    let err = service
        .create_product("Widget", "https://img.example.com/w.png", dec("-1"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn test_average_rating_none_without_reviews() {
    let (service, _) = create_test_service();

    let product = service
        .create_product("Widget", "https://img.example.com/w.png", dec("10.00"), None)
        .await
        .unwrap();

    assert_eq!(service.average_rating(product.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_average_rating_rounds_to_two_places() {
    let (service, _) = create_test_service();

    let product = service
        .create_product("Widget", "https://img.example.com/w.png", dec("10.00"), None)
        .await
        .unwrap();

    service.add_review(product.id, 4).await.unwrap();
    service.add_review(product.id, 5).await.unwrap();
    assert_eq!(
        service.average_rating(product.id).await.unwrap(),
        Some(dec("4.50"))
    );

    service.add_review(product.id, 5).await.unwrap();
    // (4 + 5 + 5) / 3 = 4.666... -> 4.67
    assert_eq!(
        service.average_rating(product.id).await.unwrap(),
        Some(dec("4.67"))
    );
}

#[tokio::test]
async fn test_add_review_validates_rating() {
    let (service, _) = create_test_service();

    let product = service
        .create_product("Widget", "https://img.example.com/w.png", dec("10.00"), None)
        .await
        .unwrap();

    assert!(service.add_review(product.id, 0).await.is_err());
    assert!(service.add_review(product.id, 6).await.is_err());
    assert!(service.add_review(product.id, 3).await.is_ok());
}

#[tokio::test]
async fn test_product_listing_includes_rating() {
    let (service, _) = create_test_service();

    let product = service
        .create_product("Widget", "https://img.example.com/w.png", dec("10.00"), None)
        .await
        .unwrap();
    service.add_review(product.id, 2).await.unwrap();

    let listed = service.list_products().await.unwrap();
    assert_eq!(listed[0].average_rating, Some(dec("2.00")));
}
