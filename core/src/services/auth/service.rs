//! Main authentication service implementation

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use fh_shared::utils::validation::{is_valid_email, normalize_email};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;

use super::config::{AuthServiceConfig, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};
use super::password::{hash_password, verify_password};

/// Result of a successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub id: Uuid,
    pub email: String,
    pub tokens: TokenPair,
}

/// Authentication service for managing the register/login/logout flow
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT and refresh token management
    token_service: Arc<TokenService<T>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<T>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new user and issue their first token pair
    ///
    /// The email is normalized to lowercase before any check, so two
    /// registrations differing only in case collide. The storage unique
    /// index backs up the application pre-check.
    ///
    /// # Errors
    ///
    /// * `ValidationError::InvalidEmail` - Malformed email
    /// * `ValidationError::InvalidLength` - Password outside 6..=68 chars
    /// * `AuthError::EmailAlreadyExists` - Email already registered
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let email = normalize_email(email);

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if password.len() < PASSWORD_MIN_LENGTH || password.len() > PASSWORD_MAX_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: PASSWORD_MIN_LENGTH,
                max: PASSWORD_MAX_LENGTH,
            }
            .into());
        }

        if self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(password, self.config.bcrypt_cost)?;
        let user = self
            .user_repository
            .create(User::new(email, password_hash))
            .await?;

        self.token_service.issue_tokens(user.id, user.email).await
    }

    /// Authenticate a user and issue a token pair
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - Unknown email or wrong password
    /// * `AuthError::AccountDisabled` - User is deactivated
    /// * `AuthError::EmailNotVerified` - User has not verified their email
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResult> {
        let email = normalize_email(email);

        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }
        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }
        if !user.is_verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        let tokens = self
            .token_service
            .issue_tokens(user.id, user.email.clone())
            .await?;

        Ok(LoginResult {
            id: user.id,
            email: user.email,
            tokens,
        })
    }

    /// Revoke a refresh token, ending that session
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidRefreshToken` - Unknown, expired, or already
    ///   revoked token
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        self.token_service.revoke_refresh_token(refresh_token).await
    }

    /// Exchange a valid refresh token for a fresh access token
    pub async fn refresh_access_token(&self, refresh_token: &str) -> DomainResult<String> {
        let user_id = self.token_service.verify_refresh_token(refresh_token).await?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }
        if !user.is_verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        self.token_service.issue_access_token(user.id, user.email)
    }
}
