//! Unit tests for token service

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockTokenRepository, TokenRepository};
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_test_service() -> TokenService<MockTokenRepository> {
    TokenService::new(MockTokenRepository::new(), TokenServiceConfig::default())
}

#[tokio::test]
async fn test_issue_tokens() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let pair = service
        .issue_tokens(user_id, "user@example.com".to_string())
        .await
        .unwrap();

    assert!(!pair.access_token.is_empty());
    assert_eq!(pair.refresh_token.len(), 32);
    assert_eq!(pair.access_expires_in, 15 * 60);
    assert_eq!(pair.refresh_expires_in, 7 * 24 * 60 * 60);
}

#[tokio::test]
async fn test_verify_access_token() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let pair = service
        .issue_tokens(user_id, "user@example.com".to_string())
        .await
        .unwrap();

    let claims = service.verify_access_token(&pair.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.email, "user@example.com");
}

#[tokio::test]
async fn test_verify_access_token_wrong_secret() {
    let service = create_test_service();
    let pair = service
        .issue_tokens(Uuid::new_v4(), "user@example.com".to_string())
        .await
        .unwrap();

    let other = TokenService::new(
        MockTokenRepository::new(),
        TokenServiceConfig::with_secret("a-completely-different-secret"),
    );

    let err = other.verify_access_token(&pair.access_token).unwrap_err();
    assert_eq!(err, DomainError::Token(TokenError::InvalidSignature));
}

#[tokio::test]
async fn test_verify_access_token_garbage() {
    let service = create_test_service();

    let err = service.verify_access_token("not-a-jwt").unwrap_err();
    assert_eq!(err, DomainError::Token(TokenError::InvalidTokenFormat));
}

#[tokio::test]
async fn test_verify_refresh_token_round_trip() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let pair = service
        .issue_tokens(user_id, "user@example.com".to_string())
        .await
        .unwrap();

    let resolved = service
        .verify_refresh_token(&pair.refresh_token)
        .await
        .unwrap();
    assert_eq!(resolved, user_id);
}

#[tokio::test]
async fn test_verify_unknown_refresh_token() {
    let service = create_test_service();

    let err = service
        .verify_refresh_token("nonexistent-token")
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::Token(TokenError::InvalidRefreshToken));
}

#[tokio::test]
async fn test_revoked_refresh_token_rejected() {
    let service = create_test_service();
    let pair = service
        .issue_tokens(Uuid::new_v4(), "user@example.com".to_string())
        .await
        .unwrap();

    service
        .revoke_refresh_token(&pair.refresh_token)
        .await
        .unwrap();

    let err = service
        .verify_refresh_token(&pair.refresh_token)
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::Token(TokenError::TokenRevoked));
}

#[tokio::test]
async fn test_revoke_is_single_shot() {
    let service = create_test_service();
    let pair = service
        .issue_tokens(Uuid::new_v4(), "user@example.com".to_string())
        .await
        .unwrap();

    service
        .revoke_refresh_token(&pair.refresh_token)
        .await
        .unwrap();

    // A second revoke of the same token is reported as invalid
    let err = service
        .revoke_refresh_token(&pair.refresh_token)
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::Token(TokenError::InvalidRefreshToken));
}

#[tokio::test]
async fn test_revoke_expired_token_rejected() {
    let service = create_test_service();

    let mut token = RefreshToken::new(Uuid::new_v4(), service.hash_token("stale-token"));
    token.expires_at = Utc::now() - Duration::days(1);
    service.repository.save_refresh_token(token).await.unwrap();

    // Revoking an expired token reports it as invalid, like the logout path expects
    let err = service
        .revoke_refresh_token("stale-token")
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::Token(TokenError::InvalidRefreshToken));
}

#[tokio::test]
async fn test_revoke_unknown_token() {
    let service = create_test_service();

    let err = service
        .revoke_refresh_token("never-issued")
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::Token(TokenError::InvalidRefreshToken));
}

#[test]
fn test_hash_token_is_deterministic() {
    let service = create_test_service();

    let h1 = service.hash_token("some-token");
    let h2 = service.hash_token("some-token");
    let h3 = service.hash_token("other-token");

    assert_eq!(h1, h2);
    assert_ne!(h1, h3);
    assert_eq!(h1.len(), 64);
}
