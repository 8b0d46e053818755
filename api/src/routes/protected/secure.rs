use actix_web::HttpResponse;

use crate::dto::secure_dto::SecureResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/test/secure
///
/// Only reachable through `JwtAuth`; echoes the authenticated subject.
pub async fn secure(auth: AuthContext) -> HttpResponse {
    log::debug!("Protected endpoint accessed by {} (jti {})", auth.subject, auth.jti);

    HttpResponse::Ok().json(SecureResponse {
        message: "You accessed a protected API endpoint!".to_string(),
        subject: auth.subject,
    })
}
