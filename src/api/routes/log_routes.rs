//! Log routes (e.g., /api/v1/logs/*)

use axum::{routing::get, Router};
use crate::api::controller::log::LogController;
use crate::app_state::AppState;

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(LogController::list_log_files))
        .route(
            "/{filename}",
            get(LogController::get_log_lines).delete(LogController::delete_log_file),
        )
        .route("/{filename}/records", get(LogController::get_log_records))
}
