//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorBody;

pub const DEVELOPER_NOT_FOUND: &str = "Developer not found";
pub const DUPLICATE_EMAIL: &str = "Developer with defined email is already exists";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid database url: {0}")]
    DatabaseUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    DuplicateEmail(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("storage: {0}")]
    Storage(String),
}

impl AppError {
    pub fn developer_not_found() -> Self {
        AppError::NotFound(DEVELOPER_NOT_FOUND.into())
    }

    pub fn duplicate_email() -> Self {
        AppError::DuplicateEmail(DUPLICATE_EMAIL.into())
    }

    /// True for outcomes caused by the request rather than by the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_) | AppError::DuplicateEmail(_) | AppError::BadRequest(_)
        )
    }
}

/// Error as rendered to the client: `{status, message}` with a matching HTTP status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }

    /// Client-caused failures take `status`; backend failures stay 500.
    pub fn with_client_status(err: AppError, status: StatusCode) -> Self {
        if err.is_client_error() {
            ApiError::new(status, err.to_string())
        } else {
            ApiError::from(err)
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let status = match &err {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) | AppError::Storage(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        }
        ApiError::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: self.status.as_u16(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_messages_are_rendered_verbatim() {
        assert_eq!(AppError::developer_not_found().to_string(), "Developer not found");
        assert_eq!(
            AppError::duplicate_email().to_string(),
            "Developer with defined email is already exists"
        );
    }

    #[test]
    fn client_status_only_applies_to_domain_errors() {
        let api = ApiError::with_client_status(AppError::developer_not_found(), StatusCode::BAD_REQUEST);
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.message, DEVELOPER_NOT_FOUND);

        let api = ApiError::with_client_status(AppError::Db(sqlx::Error::PoolTimedOut), StatusCode::BAD_REQUEST);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_defaults_to_404() {
        let api = ApiError::from(AppError::developer_not_found());
        assert_eq!(api.status, StatusCode::NOT_FOUND);
    }
}
