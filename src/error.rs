// HTTP API Error Types
use axum::{
    extract::rejection::{FormRejection, PathRejection, QueryRejection},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::auth::AuthError;
use crate::database::DatabaseError;
use crate::filter::FilterError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 406 Not Acceptable (missing, deleted or rejected by a filter rule)
    NotAcceptable { message: String, code: &'static str },

    // 422 Unprocessable Entity
    UnprocessableEntity {
        message: String,
        field_errors: HashMap<String, String>,
    },

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
            ApiError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::NotAcceptable { message, .. } => message,
            ApiError::UnprocessableEntity { message, .. } => message,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::NotAcceptable { code, .. } => code,
            ApiError::UnprocessableEntity { .. } => "UNPROCESSABLE_ENTITY",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::UnprocessableEntity { message, field_errors } => {
                json!({
                    "error": true,
                    "message": message,
                    "code": self.error_code(),
                    "field_errors": field_errors
                })
            }
            _ => {
                json!({
                    "error": true,
                    "message": self.message(),
                    "code": self.error_code()
                })
            }
        }
    }
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    /// The fixed 401 used for any bearer token problem
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized("Could not validate credentials".to_string())
    }

    pub fn forbidden() -> Self {
        ApiError::Forbidden("Forbidden".to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn not_acceptable(message: impl std::fmt::Display, code: &'static str) -> Self {
        ApiError::NotAcceptable {
            message: format!("Not acceptable: {}", message),
            code,
        }
    }

    pub fn unprocessable_entity(field: &str, problem: impl Into<String>) -> Self {
        Self::invalid_input("Invalid query parameters", field, problem)
    }

    fn invalid_input(message: &str, field: &str, problem: impl Into<String>) -> Self {
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), problem.into());
        ApiError::UnprocessableEntity {
            message: message.to_string(),
            field_errors,
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotExists(msg) => ApiError::not_acceptable(msg, "NOT_EXISTS"),
            DatabaseError::IsDeleted(msg) => ApiError::not_acceptable(msg, "IS_DELETED"),
            DatabaseError::NotValidParam(msg) => ApiError::not_acceptable(msg, "NOT_VALID_PARAM"),
            DatabaseError::OutOfRange(msg) => ApiError::not_acceptable(msg, "OUT_OF_RANGE"),
            DatabaseError::ConfigMissing(_) | DatabaseError::InvalidDatabaseUrl(_) => {
                tracing::error!("Database configuration error: {}", err);
                ApiError::service_unavailable("Database temporarily unavailable")
            }
            DatabaseError::Filter(e) => {
                // Identifiers come from code, never from clients
                tracing::error!("Filter construction error: {}", e);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
            DatabaseError::Sqlx(sqlx_err) => match sqlx_err {
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                    tracing::error!("Database unavailable: {}", sqlx_err);
                    ApiError::service_unavailable("Database temporarily unavailable")
                }
                other => {
                    // Log the real error but return generic message
                    tracing::error!("SQLx error: {}", other);
                    ApiError::internal_server_error("Database error occurred")
                }
            },
        }
    }
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        DatabaseError::from(err).into()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken(reason) => {
                tracing::warn!("Rejected bearer token: {}", reason);
                ApiError::invalid_credentials()
            }
            other => {
                tracing::error!("Token configuration error: {}", other);
                ApiError::internal_server_error("Authentication is not available")
            }
        }
    }
}

// Extractor rejections answer with the same JSON body as every other error
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::invalid_input("Invalid query parameters", "query", rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::invalid_input("Invalid form data", "form", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::invalid_input("Invalid path parameters", "path", rejection.body_text())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let mut response = (status, Json(self.to_json())).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
