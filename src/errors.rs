use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::api::dto::ApiResponse;
use crate::core::persistence::logs::log_file_error::LogFileError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<LogFileError>() {
            Some(LogFileError::NotFound(_)) => AppError::NotFound(err.to_string()),
            Some(LogFileError::InvalidFilename(_)) => AppError::BadRequest(err.to_string()),
            Some(LogFileError::Io(_)) => internal_error(format!("{err:#}")),
            None => internal_error(format!("{err:#}")),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match self {
            AppError::InternalServerError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(ApiResponse::<()>::err(code, self.to_string()));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_status() {
        let not_found: AppError = anyhow::Error::from(LogFileError::NotFound("a.log".into())).into();
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let invalid: AppError = anyhow::Error::from(LogFileError::InvalidFilename("../x".into())).into();
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let io: AppError = anyhow::Error::from(LogFileError::from(io))
            .context("Failed to open log file")
            .into();
        assert!(matches!(io, AppError::InternalServerError(ref msg) if msg.contains("denied")));

        let other: AppError = anyhow::anyhow!("disk on fire").into();
        assert_eq!(other.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
