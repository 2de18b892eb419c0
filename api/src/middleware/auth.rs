//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware extracts a Bearer token from the Authorization header,
//! verifies it through the core `TokenService`, and injects an
//! [`AuthContext`] into the request extensions. Protected handlers pull the
//! context back out with the `FromRequest` extractor.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use ws_core::domain::entities::user::UserRole;
use ws_core::errors::{DomainError, TokenError};
use ws_core::services::token::{Claims, TokenService};
use ws_shared::ErrorResponse;

/// Authenticated caller identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID from the subject claim
    pub user_id: Uuid,
    /// Role from the role claim
    pub role: UserRole,
}

impl AuthContext {
    /// Build a context from verified JWT claims
    pub fn from_claims(claims: &Claims) -> Result<Self, DomainError> {
        Ok(Self {
            user_id: claims.user_id()?,
            role: claims.user_role()?,
        })
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Create the middleware around a token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(unauthorized_error(
                        "unauthorized",
                        "Authentication required",
                    ));
                }
            };

            let claims = match token_service.verify_access_token(&token) {
                Ok(claims) => claims,
                Err(DomainError::Token(TokenError::TokenExpired)) => {
                    return Err(unauthorized_error("token_expired", "Token expired"));
                }
                Err(error) => {
                    log::warn!("token verification failed: {}", error);
                    return Err(unauthorized_error("invalid_token", "Invalid token"));
                }
            };

            let context = match AuthContext::from_claims(&claims) {
                Ok(context) => context,
                Err(error) => {
                    log::warn!("token claims rejected: {}", error);
                    return Err(unauthorized_error("invalid_token", "Invalid token"));
                }
            };

            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

fn unauthorized_error(code: &str, message: &str) -> Error {
    let response = HttpResponse::Unauthorized().json(ErrorResponse::new(code, message));
    InternalError::from_response(message.to_string(), response).into()
}

/// Extractor for handlers behind [`JwtAuth`]
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized_error("unauthorized", "Authentication required"));

        ready(result)
    }
}
