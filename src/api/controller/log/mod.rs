//! Log controller: connects routes to the log file service
//!
//! Log payloads are returned unwrapped; errors still use the `ApiResponse` envelope.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};
use validator::Validate;

use crate::api::dto::log_dto::{LogListResponse, LogPageQuery, LogRecordPageResponse};
use crate::api::util::json::to_bare_json;
use crate::app_state::AppState;
use crate::domain::log::model::RawLogPage;
use crate::errors::AppError;

pub struct LogController;

impl LogController {
    pub async fn list_log_files(
        State(state): State<AppState>,
    ) -> Result<Json<LogListResponse>, AppError> {
        to_bare_json(state.log_service.list_log_files().await.map(LogListResponse::new))
    }

    pub async fn get_log_lines(
        State(state): State<AppState>,
        Path(filename): Path<String>,
        Query(query): Query<LogPageQuery>,
    ) -> Result<Json<RawLogPage>, AppError> {
        query.validate()?;
        to_bare_json(
            state
                .log_service
                .get_log_page(&filename, query.page(), query.page_size())
                .await,
        )
    }

    pub async fn get_log_records(
        State(state): State<AppState>,
        Path(filename): Path<String>,
        Query(query): Query<LogPageQuery>,
    ) -> Result<Json<LogRecordPageResponse>, AppError> {
        query.validate()?;
        to_bare_json(
            state
                .log_service
                .get_log_records(&filename, query.page(), query.page_size())
                .await
                .map(LogRecordPageResponse::from),
        )
    }

    pub async fn delete_log_file(
        State(state): State<AppState>,
        Path(filename): Path<String>,
    ) -> Result<Json<Value>, AppError> {
        to_bare_json(
            state
                .log_service
                .delete_log_file(&filename)
                .await
                .map(|_| json!({ "message": format!("Deleted {filename}") })),
        )
    }
}
