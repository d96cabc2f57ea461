use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::r2d2;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use stripe::WebhookError;
use utoipa::ToSchema;

#[derive(Debug)]
pub enum ApiError {
    Database(diesel::result::Error),
    DatabaseConnection(String),
    Validation(validator::ValidationErrors),
    Auth(AuthError),
    Payment(String),
    Webhook(WebhookError),
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

#[derive(Debug)]
pub enum AuthError {
    MissingHeader,
    InvalidFormat,
    InvalidToken(String),
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::Auth(e) => write!(f, "Authentication error: {}", e),
            ApiError::Payment(e) => write!(f, "Payment error: {}", e),
            ApiError::Webhook(e) => write!(f, "Webhook error: {}", e),
            ApiError::NotFound(e) => write!(f, "Not found: {}", e),
            ApiError::BadRequest(e) => write!(f, "Bad request: {}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingHeader => write!(f, "Missing Authorization header"),
            AuthError::InvalidFormat => write!(f, "Invalid Authorization header format"),
            AuthError::InvalidToken(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            ApiError::Webhook(e) => Some(e),
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<stripe::WebhookError> for ApiError {
    fn from(err: stripe::WebhookError) -> Self {
        ApiError::Webhook(err)
    }
}

impl From<stripe::StripeError> for ApiError {
    fn from(err: stripe::StripeError) -> Self {
        ApiError::Payment(err.to_string())
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Database(e) => match e {
                diesel::result::Error::NotFound => {
                    (StatusCode::NOT_FOUND, "Record not found".to_string())
                }
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => (StatusCode::BAD_REQUEST, format!("Database error: {}", e)),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                ),
            },
            ApiError::DatabaseConnection(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database connection error: {}", e),
            ),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation error: {}", errors),
            ),
            ApiError::Auth(e) => (StatusCode::UNAUTHORIZED, format!("Auth error: {}", e)),
            ApiError::Payment(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Payment provider error: {}", msg),
            ),
            ApiError::Webhook(e) => match e {
                WebhookError::BadSignature | WebhookError::BadTimestamp(_) => {
                    (StatusCode::BAD_REQUEST, format!("Webhook error: {}", e))
                }
                WebhookError::BadKey => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Webhook error: invalid secret key".to_string(),
                ),
                _ => (StatusCode::BAD_REQUEST, format!("Webhook error: {}", e)),
            },
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", msg),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error): (StatusCode, String) = self.into();
        (status, Json(ApiErrorResponse { error })).into_response()
    }
}
