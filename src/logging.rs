use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

const APP_LOG_FILE_PREFIX: &str = "logdash.log";

/// Installs the global subscriber: stdout always, plus a daily-rolling file
/// when `app_log_dir` is configured. Keep the returned guard alive for the
/// lifetime of the process or buffered file output is lost.
pub fn init_tracing(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match &config.app_log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, APP_LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false).with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_level(true))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
