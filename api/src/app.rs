//! Application factory
//!
//! Wires the routes, middleware and shared state into an Actix-web
//! application. The server binary and the integration tests both build
//! their app through [`create_app`].

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpRequest, HttpResponse,
};

use tg_core::errors::DomainResult;
use tg_core::repositories::{CredentialVerifier, InMemoryCredentialStore};
use tg_core::services::auth::AuthService;
use tg_core::services::token::{SigningKey, TokenIssuer, TokenServiceConfig, TokenValidator};
use tg_shared::{AuthConfig, Environment};

use crate::handlers::error::ApiError;
use crate::middleware::{auth::JwtAuth, security::SecurityMiddleware};
use crate::routes::auth::{login::login, AppState};
use crate::routes::protected::secure::secure;

/// Services built once at startup and shared by every worker
pub struct AppServices {
    pub state: web::Data<AppState<InMemoryCredentialStore>>,
    pub validator: Arc<TokenValidator>,
}

/// Build the signing key, issuer, validator and credential store.
///
/// Issuer and validator share one key and one issuer/audience pair.
pub fn build_services(config: &AuthConfig) -> DomainResult<AppServices> {
    let key = Arc::new(SigningKey::from_secret(config.jwt.secret_bytes())?);
    let token_config = TokenServiceConfig::from(&config.jwt);

    let issuer = Arc::new(TokenIssuer::new(key.clone(), token_config.clone()));
    let validator = Arc::new(TokenValidator::new(key, &token_config));

    let store = InMemoryCredentialStore::new()
        .with_user(&config.credentials.username, &config.credentials.password)?;
    log::info!("Credential store seeded with {} account(s)", store.len());

    let auth_service = Arc::new(AuthService::new(Arc::new(store), issuer));

    Ok(AppServices {
        state: web::Data::new(AppState::new(auth_service)),
        validator,
    })
}

/// Create and configure the application with all dependencies
pub fn create_app<V>(
    app_state: web::Data<AppState<V>>,
    validator: Arc<TokenValidator>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    V: CredentialVerifier + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Security headers wrap everything, including rejections
        .wrap(Logger::default())
        .wrap(SecurityMiddleware::for_environment(environment))
        .route("/", web::get().to(home))
        .route("/health", web::get().to(health_check))
        .service(web::scope("/api/auth").route("/login", web::post().to(login::<V>)))
        .service(
            web::scope("/api/test")
                .wrap(JwtAuth::new(validator))
                .route("/secure", web::get().to(secure)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Public landing endpoint
async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("A simple JWT Token application!")
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tokengate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    log::debug!("Rejected JSON body for {}: {}", req.path(), err);
    ApiError::BadRequest {
        message: "Malformed JSON request body".to_string(),
    }
    .into()
}
