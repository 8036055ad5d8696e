pub mod health_service;
pub mod log_service;
