use anyhow::Result;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::errors::AppError;

/// Map a domain result into the JSON envelope; domain errors pick the status.
pub fn to_json<T: serde::Serialize>(
    result: Result<T>
) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(value))),
        Err(err) => Err(AppError::from(err)),
    }
}

/// Like [`to_json`] but serializes the payload at the top level, for
/// responses whose field layout is fixed by their consumers.
pub fn to_bare_json<T: serde::Serialize>(result: Result<T>) -> Result<Json<T>, AppError> {
    result.map(Json).map_err(AppError::from)
}
