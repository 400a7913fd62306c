//! Domain-specific error types for authentication, tokens, and validation.
//!
//! Error messages here are the canonical API-facing strings; the
//! presentation layer maps each variant to its HTTP status and payload
//! shape.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("A user with this email already exists.")]
    EmailAlreadyExists,

    #[error("Invalid credentials, try again!")]
    InvalidCredentials,

    #[error("Account disabled, contact admin!")]
    AccountDisabled,

    #[error("Email is not verified!")]
    EmailNotVerified,

    #[error("User not found")]
    UserNotFound,

    #[error("Authentication required")]
    AuthenticationRequired,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token is expired or invalid")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Favorites-list consistency errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FavoritesError {
    #[error("Client does not exist")]
    ClientNotFound,

    #[error("Client already has a favorite list.")]
    DuplicateList,

    #[error("Favorite list not found")]
    ListNotFound,

    #[error("Product does not exist")]
    ProductNotFound,

    #[error("Product already in the favorite list")]
    AlreadyFavorited,

    #[error("Product not in the favorite list.")]
    NotFavorited,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length for field: {field} (min: {min}, max: {max})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Duplicate value for field: {field}")]
    DuplicateValue { field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            AuthError::EmailAlreadyExists.to_string(),
            "A user with this email already exists."
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials, try again!"
        );
        assert_eq!(
            AuthError::AccountDisabled.to_string(),
            "Account disabled, contact admin!"
        );
        assert_eq!(
            AuthError::EmailNotVerified.to_string(),
            "Email is not verified!"
        );
    }

    #[test]
    fn test_refresh_token_error_message() {
        assert_eq!(
            TokenError::InvalidRefreshToken.to_string(),
            "Token is expired or invalid"
        );
    }

    #[test]
    fn test_favorites_error_messages() {
        assert_eq!(
            FavoritesError::DuplicateList.to_string(),
            "Client already has a favorite list."
        );
        assert_eq!(
            FavoritesError::AlreadyFavorited.to_string(),
            "Product already in the favorite list"
        );
        assert_eq!(
            FavoritesError::NotFavorited.to_string(),
            "Product not in the favorite list."
        );
        assert_eq!(
            FavoritesError::ProductNotFound.to_string(),
            "Product does not exist"
        );
    }

    #[test]
    fn test_validation_error_fields() {
        let err = ValidationError::InvalidLength {
            field: "password".to_string(),
            min: 6,
            max: 68,
        };
        let message = err.to_string();
        assert!(message.contains("password"));
        assert!(message.contains('6'));
        assert!(message.contains("68"));
    }
}
