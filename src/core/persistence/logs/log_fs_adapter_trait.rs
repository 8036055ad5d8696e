use anyhow::Result;

/// Filesystem access for rotated log files living in one directory.
pub trait LogFsAdapterTrait: Send + Sync {
    /// Names of the regular files in the log directory, in directory order.
    fn list_filenames(&self) -> Result<Vec<String>>;

    fn has_file(&self, filename: &str) -> Result<bool>;

    /// Number of newline-delimited lines, counting an unterminated last line.
    fn total_lines(&self, filename: &str) -> Result<u64>;

    /// Lines of the one-based `page`, terminators stripped.
    fn read_page(&self, filename: &str, page: i64, page_size: i64) -> Result<Vec<String>>;

    fn delete(&self, filename: &str) -> Result<()>;
}
