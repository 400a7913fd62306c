//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, TokenPair};
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Service for managing JWT access tokens and opaque refresh tokens
///
/// Access tokens are HS256-signed JWTs. Refresh tokens are random opaque
/// strings stored only as SHA-256 hashes; revocation flips the stored
/// `is_revoked` flag, so it is effective immediately.
pub struct TokenService<R: TokenRepository> {
    pub(crate) repository: R,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generates a new token pair (access + refresh tokens) for a user
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The generated token pair
    /// * `Err(TokenError)` - Token generation failed
    pub async fn issue_tokens(
        &self,
        user_id: Uuid,
        email: String,
    ) -> Result<TokenPair, DomainError> {
        let access_token = self.issue_access_token(user_id, email)?;
        let refresh_token = self.generate_refresh_token(user_id).await?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Generates an access token for a user
    pub fn issue_access_token(&self, user_id: Uuid, email: String) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(user_id, email);
        self.encode_jwt(&claims)
    }

    /// Generates a refresh token and stores its hash
    async fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        // Generate a random 32-character alphanumeric token string
        let mut rng = rand::thread_rng();
        let token_string: String = (0..32)
            .map(|_| {
                let idx = rng.gen_range(0..62);
                match idx {
                    0..10 => (b'0' + idx) as char,
                    10..36 => (b'a' + idx - 10) as char,
                    36..62 => (b'A' + idx - 36) as char,
                    _ => unreachable!(),
                }
            })
            .collect();

        let token_hash = self.hash_token(&token_string);
        let refresh_token = RefreshToken::new(user_id, token_hash);

        self.repository
            .save_refresh_token(refresh_token)
            .await
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(token_string)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is invalid, expired, or malformed
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                        DomainError::Token(TokenError::TokenNotYetValid)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::InvalidTokenFormat),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Verifies a refresh token and returns the owning user's ID
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - The user ID if token is valid
    /// * `Err(TokenError)` - Token is unknown, expired, or revoked
    pub async fn verify_refresh_token(&self, token: &str) -> Result<Uuid, DomainError> {
        let token_hash = self.hash_token(token);

        let refresh_token = self
            .repository
            .find_refresh_token(&token_hash)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        if refresh_token.is_expired() {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        if refresh_token.is_revoked {
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }

        Ok(refresh_token.user_id)
    }

    /// Revokes a specific refresh token
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Token was revoked by this call
    /// * `Err(TokenError::InvalidRefreshToken)` - Unknown, expired, or
    ///   already revoked
    pub async fn revoke_refresh_token(&self, token: &str) -> Result<(), DomainError> {
        let token_hash = self.hash_token(token);

        let revoked = self.repository.revoke_token(&token_hash).await?;
        if !revoked {
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }
        Ok(())
    }

    /// Removes expired tokens from storage
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of tokens cleaned up
    pub async fn cleanup_expired_tokens(&self) -> Result<usize, DomainError> {
        self.repository.delete_expired_tokens().await
    }

    /// Hashes a token for secure storage
    pub(crate) fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Access token lifetime in seconds, for expiry metadata
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_minutes * 60
    }
}
