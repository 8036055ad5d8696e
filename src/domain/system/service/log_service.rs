use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::persistence::logs::log_file_error::LogFileError;
use crate::core::persistence::logs::log_repository::LogRepository;
use crate::domain::log::model::{NormalizedPage, RawLogPage};
use crate::domain::log::service::{assemble, sort_filenames};

/// File-read service feeding the log core.
///
/// Repository calls are blocking `std::fs` work and run on the blocking pool.
pub struct LogService<R: LogRepository> {
    repo: Arc<R>,
}

impl<R: LogRepository + 'static> LogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo: Arc::new(repo) }
    }

    /// Log filenames, newest first when every name carries a date.
    pub async fn list_log_files(&self) -> Result<Vec<String>> {
        let names = self.run_blocking(|repo| repo.get_log_filenames()).await?;
        Ok(sort_filenames(&names))
    }

    pub async fn get_log_page(&self, filename: &str, page: i64, page_size: i64) -> Result<RawLogPage> {
        let name = filename.to_string();
        let (total, results) = self
            .run_blocking(move |repo| {
                ensure_exists(repo, &name)?;
                let total = repo.count_lines(&name)?;
                let results = repo.get_lines(&name, page, page_size)?;
                Ok((total, results))
            })
            .await?;
        debug!(filename, page, page_size, total, lines = results.len(), "Read log page");

        Ok(RawLogPage {
            page,
            page_size,
            total,
            results,
        })
    }

    pub async fn get_log_records(
        &self,
        filename: &str,
        page: i64,
        page_size: i64,
    ) -> Result<NormalizedPage> {
        let raw = self.get_log_page(filename, page, page_size).await?;
        Ok(assemble(&raw))
    }

    pub async fn delete_log_file(&self, filename: &str) -> Result<()> {
        let name = filename.to_string();
        self.run_blocking(move |repo| {
            ensure_exists(repo, &name)?;
            repo.delete_log(&name)
        })
        .await?;
        info!(filename, "Deleted log file");
        Ok(())
    }

    async fn run_blocking<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&R) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let repo = Arc::clone(&self.repo);
        tokio::task::spawn_blocking(move || f(&repo))
            .await
            .context("Log file task failed")?
    }
}

fn ensure_exists<R: LogRepository>(repo: &R, filename: &str) -> Result<()> {
    if !repo.has_log(filename)? {
        return Err(LogFileError::NotFound(filename.to_string()).into());
    }
    Ok(())
}
