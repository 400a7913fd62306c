//! Request and response bodies for the auth endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use fh_core::domain::entities::token::TokenPair;
use fh_core::services::auth::LoginResult;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[validate(length(min = 6, max = 68, message = "Password must be 6-68 characters."))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, message = "Enter a valid email address."))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh: String,
}

/// Access/refresh pair as exposed on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensDto {
    pub access: String,
    pub refresh: String,
}

impl From<TokenPair> for TokensDto {
    fn from(pair: TokenPair) -> Self {
        Self {
            access: pair.access_token,
            refresh: pair.refresh_token,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub tokens: TokensDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: Uuid,
    pub email: String,
    pub tokens: TokensDto,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            id: result.id,
            email: result.email,
            tokens: result.tokens.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenResponse {
    pub access: String,
}
