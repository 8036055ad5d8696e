use std::path::PathBuf;

use anyhow::Result;

use super::log_fs_adapter::LogFsAdapter;
use super::log_fs_adapter_trait::LogFsAdapterTrait;

/// Service-facing repository for log files.
pub trait LogRepository: Send + Sync {
    fn fs_adapter(&self) -> &dyn LogFsAdapterTrait;

    fn get_log_filenames(&self) -> Result<Vec<String>> {
        self.fs_adapter().list_filenames()
    }

    fn has_log(&self, filename: &str) -> Result<bool> {
        self.fs_adapter().has_file(filename)
    }

    fn count_lines(&self, filename: &str) -> Result<u64> {
        self.fs_adapter().total_lines(filename)
    }

    fn get_lines(&self, filename: &str, page: i64, page_size: i64) -> Result<Vec<String>> {
        self.fs_adapter().read_page(filename, page, page_size)
    }

    fn delete_log(&self, filename: &str) -> Result<()> {
        self.fs_adapter().delete(filename)
    }
}

pub struct LogRepositoryImpl {
    adapter: LogFsAdapter,
}

impl LogRepositoryImpl {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            adapter: LogFsAdapter::new(log_dir),
        }
    }
}

impl LogRepository for LogRepositoryImpl {
    fn fs_adapter(&self) -> &dyn LogFsAdapterTrait {
        &self.adapter
    }
}
