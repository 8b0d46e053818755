//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! runs it through the core `TokenValidator`, and injects the authenticated
//! context into the request. Requests that fail any stage are answered with
//! the uniform `401` from [`ApiError::Unauthorized`]; the wrapped service is
//! never called for them.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use tg_core::{domain::entities::token::Claims, services::token::TokenValidator};

use crate::handlers::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated caller context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Authenticated principal (the token subject)
    pub subject: String,
    /// JWT ID for tracking
    pub jti: String,
    /// When the presented token stops being accepted
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthContext {
    /// Creates a new authentication context from validated claims
    pub fn from_claims(claims: Claims) -> Self {
        let expires_at = claims.expires_at();
        Self {
            subject: claims.sub,
            jti: claims.jti,
            expires_at,
        }
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    validator: Arc<TokenValidator>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware around a shared validator
    pub fn new(validator: Arc<TokenValidator>) -> Self {
        Self { validator }
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
            validator: Arc::clone(&self.validator),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    validator: Arc<TokenValidator>,
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
        let validator = Arc::clone(&self.validator);

        Box::pin(async move {
            let Some(token) = extract_bearer_token(&req) else {
                log::debug!(
                    "Missing or non-bearer Authorization header: {} {}",
                    req.method(),
                    req.path()
                );
                return Ok(reject(req));
            };

            let claims = match validator.validate(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    log::debug!("Bearer token rejected at {} stage: {}", e.stage(), e);
                    return Ok(reject(req));
                }
            };

            // Inject auth context into request extensions
            req.extensions_mut().insert(AuthContext::from_claims(claims));

            // Continue with the request
            let response = service.call(req).await?;
            Ok(response.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
    req.into_response(ApiError::Unauthorized.error_response())
        .map_into_right_body()
}

/// Extracts Bearer token from Authorization header.
///
/// The scheme name is matched case-insensitively.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let scheme = value.get(..BEARER_PREFIX.len())?;
    if !scheme.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }

    let token = value[BEARER_PREFIX.len()..].trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized.into());

        ready(result)
    }
}
