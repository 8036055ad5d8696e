use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::persistence::logs::log_repository::LogRepositoryImpl;
use crate::domain::system::service::log_service::LogService;

macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                $path($($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub log_service: Arc<LogService<LogRepositoryImpl>>,
    pub system_service: Arc<SystemService>,
}

pub fn build_app_state(config: &AppConfig) -> AppState {
    AppState {
        log_service: Arc::new(LogService::new(LogRepositoryImpl::new(config.log_directory.clone()))),
        system_service: Arc::new(SystemService::default()),
    }
}

#[derive(Clone, Default)]
pub struct SystemService;

impl SystemService {
    delegate_async_service! {
        fn health() -> serde_json::Value => crate::domain::system::service::health_service::health;
        fn version() -> serde_json::Value => crate::domain::system::service::health_service::version;
    }
}
