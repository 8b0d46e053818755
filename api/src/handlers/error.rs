//! Mapping of domain errors onto HTTP responses.
//!
//! Every authorization failure produces the same `401` body and the same
//! `WWW-Authenticate` challenge, whatever stage rejected the request. The
//! specific reason only reaches the logs.

use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use thiserror::Error;
use tg_core::errors::{DomainError, TokenError};
use tg_shared::{error_codes, ErrorResponse};

/// Message returned for every rejected credential or token
pub const ACCESS_DENIED: &str = "Access denied";

/// Errors returned by HTTP handlers and middleware
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Access denied")]
    Unauthorized,

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Invalid request data")]
    Validation(#[from] validator::ValidationErrors),

    #[error("The requested resource was not found")]
    NotFound,

    #[error("Internal error")]
    Internal,
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        if error.is_authorization_failure() {
            log::info!("Authorization failure: {}", error);
            ApiError::Unauthorized
        } else {
            log::error!("Domain Error: {:?}", error);
            ApiError::Internal
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        DomainError::from(error).into()
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest { .. } | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Unauthorized => ErrorResponse::new(error_codes::UNAUTHORIZED, ACCESS_DENIED),
            ApiError::BadRequest { message } => {
                ErrorResponse::new(error_codes::BAD_REQUEST, message.as_str())
            }
            ApiError::Validation(errors) => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, self.to_string())
                    .add_detail("validation_errors", errors)
            }
            ApiError::NotFound => ErrorResponse::new(error_codes::NOT_FOUND, self.to_string()),
            ApiError::Internal => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
            }
        };

        let mut response = HttpResponse::build(self.status_code());
        if matches!(self, ApiError::Unauthorized) {
            response.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        response.json(body)
    }
}
