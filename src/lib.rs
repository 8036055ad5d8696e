//! Browse rotated server log files through a paginated view.
//!
//! `domain::log` holds the pure core: record normalization, page assembly,
//! filename chronology and pagination navigation. The rest is the axum
//! service that reads log files from disk and feeds that core.

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod routes;
pub mod shutdown;
