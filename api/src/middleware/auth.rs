//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! through the registered token service, and injects the caller's context
//! into the request.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use fh_core::{
    domain::entities::token::Claims,
    errors::{DomainError, TokenError},
    repositories::TokenRepository,
    services::token::TokenService,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    /// User email, recorded as the audit actor on mutations
    pub email: String,
    /// JWT ID for tracking
    pub jti: String,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidTokenFormat))?;
        Ok(Self {
            user_id,
            email: claims.email,
            jti: claims.jti,
        })
    }
}

/// JWT authentication middleware factory
///
/// Verification is delegated to the `TokenServiceWrapper` registered in
/// app data, so issuer and audience checks always apply.
pub struct JwtAuth;

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // Extract token from Authorization header
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(req
                        .error_response(ErrorUnauthorized(
                            "Missing or invalid Authorization header",
                        ))
                        .map_into_right_body());
                }
            };

            let verify_result = match req.app_data::<web::Data<Arc<dyn TokenServiceWrapper>>>() {
                Some(token_service) => token_service.verify_access_token(&token),
                None => {
                    return Ok(req
                        .error_response(ErrorUnauthorized("JWT verification not configured"))
                        .map_into_right_body());
                }
            };

            let auth_context = match verify_result {
                Ok(claims) => match AuthContext::from_claims(claims) {
                    Ok(context) => context,
                    Err(e) => {
                        return Ok(req
                            .error_response(ErrorUnauthorized(format!("Invalid token: {}", e)))
                            .map_into_right_body());
                    }
                },
                Err(e) => {
                    return Ok(req
                        .error_response(ErrorUnauthorized(format!(
                            "Token verification failed: {}",
                            e
                        )))
                        .map_into_right_body());
                }
            };

            // Inject auth context into request extensions
            req.extensions_mut().insert(auth_context);

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Trait for wrapping TokenService to allow dynamic dispatch
pub trait TokenServiceWrapper: Send + Sync {
    fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError>;
}

/// Implementation of TokenServiceWrapper for any TokenService
impl<R: TokenRepository> TokenServiceWrapper for TokenService<R> {
    fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify_access_token(token)
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(
            extract_bearer_token(&req),
            Some("test_token_123".to_string())
        );

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_auth_context_from_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, "a@b.com".to_string());

        let context = AuthContext::from_claims(claims).unwrap();
        assert_eq!(context.user_id, user_id);
        assert_eq!(context.email, "a@b.com");
    }

    #[test]
    fn test_auth_context_rejects_bad_subject() {
        let mut claims = Claims::new_access_token(Uuid::new_v4(), "a@b.com".to_string());
        claims.sub = "not-a-uuid".to_string();

        assert!(AuthContext::from_claims(claims).is_err());
    }
}
