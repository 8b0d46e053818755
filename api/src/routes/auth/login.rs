use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::handlers::error::ApiError;

use tg_core::repositories::CredentialVerifier;

use super::AppState;

/// Handler for POST /api/auth/login
///
/// Verifies the submitted credentials and, on success, returns a signed
/// access token valid for 30 minutes.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "admin",
///     "password": "password"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJhbGciOiJIUzI1NiJ9...",
///     "token_type": "Bearer",
///     "expires_in": 1800
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed body or empty fields
/// - 401 Unauthorized: Unknown user or wrong password
/// - 500 Internal Server Error: Credential store or signing failure
pub async fn login<V>(
    state: web::Data<AppState<V>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    V: CredentialVerifier + 'static,
{
    request.validate()?;

    let issued = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(LoginResponse::from(issued)))
}
