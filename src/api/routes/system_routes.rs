//! System routes (e.g., /api/v1/system/*)

use axum::{routing::get, Router};
use crate::api::controller::system::SystemController;
use crate::app_state::AppState;

pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(SystemController::health))
        .route("/version", get(SystemController::version))
}
