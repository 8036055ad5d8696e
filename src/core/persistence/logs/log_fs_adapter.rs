use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use tracing::{debug, error, warn};

use super::log_file_error::LogFileError;
use super::log_fs_adapter_trait::LogFsAdapterTrait;

const LF: u8 = b'\n';
const CR: u8 = b'\r';

/// Reads log files from a single directory.
///
/// Filenames are plain names relative to `root`; anything that could escape
/// the directory is rejected before the filesystem is touched.
pub struct LogFsAdapter {
    root: PathBuf,
}

impl LogFsAdapter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, filename: &str) -> Result<PathBuf> {
        let invalid = filename.is_empty()
            || filename == "."
            || filename.contains("..")
            || filename.contains(['/', '\\', '\0']);

        if invalid {
            return Err(LogFileError::InvalidFilename(filename.to_string()).into());
        }
        Ok(self.root.join(filename))
    }

    fn open(&self, filename: &str) -> Result<BufReader<File>> {
        let path = self.resolve(filename)?;
        if !path.is_file() {
            return Err(LogFileError::NotFound(filename.to_string()).into());
        }
        let file = File::open(&path)
            .map_err(LogFileError::Io)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        Ok(BufReader::new(file))
    }
}

impl LogFsAdapterTrait for LogFsAdapter {
    fn list_filenames(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            error!(dir = %self.root.display(), "Log directory does not exist");
            return Ok(Vec::new());
        }

        let dir = fs::read_dir(&self.root)
            .map_err(LogFileError::Io)
            .context("Failed to read log directory")?;
        let mut names = Vec::new();

        for entry in dir {
            let entry = entry
                .map_err(LogFileError::Io)
                .context("Failed to read log directory entry")?;
            if entry.file_type().map_err(LogFileError::Io)?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!(name = ?raw, "Skipping log file with non UTF-8 name"),
            }
        }

        Ok(names)
    }

    fn has_file(&self, filename: &str) -> Result<bool> {
        Ok(self.resolve(filename)?.is_file())
    }

    fn total_lines(&self, filename: &str) -> Result<u64> {
        let reader = self.open(filename)?;
        let mut count = 0u64;
        for segment in reader.split(LF) {
            segment
                .map_err(LogFileError::Io)
                .with_context(|| format!("Failed reading lines of {filename}"))?;
            count += 1;
        }
        Ok(count)
    }

    fn read_page(&self, filename: &str, page: i64, page_size: i64) -> Result<Vec<String>> {
        let page = page.max(1) as usize;
        let page_size = page_size.max(1) as usize;
        let skip = (page - 1).saturating_mul(page_size);

        debug!(filename, page, page_size, "Reading log page");

        let reader = self.open(filename)?;
        reader
            .split(LF)
            .skip(skip)
            .take(page_size)
            .map(|segment| {
                let mut bytes = segment
                    .map_err(LogFileError::Io)
                    .with_context(|| format!("Problem reading lines in file {filename}"))?;
                if bytes.last() == Some(&CR) {
                    bytes.pop();
                }
                Ok::<_, anyhow::Error>(String::from_utf8_lossy(&bytes).into_owned())
            })
            .collect()
    }

    fn delete(&self, filename: &str) -> Result<()> {
        let path = self.resolve(filename)?;
        if !path.is_file() {
            error!(filename, "Unable to delete missing log file");
            return Ok(());
        }
        fs::remove_file(&path)
            .map_err(LogFileError::Io)
            .with_context(|| format!("Failed to delete {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn adapter_with(files: &[(&str, &str)]) -> (TempDir, LogFsAdapter) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            let mut f = File::create(dir.path().join(name)).unwrap();
            f.write_all(body.as_bytes()).unwrap();
        }
        let adapter = LogFsAdapter::new(dir.path());
        (dir, adapter)
    }

    #[test]
    fn lists_files_but_not_directories() {
        let (dir, adapter) = adapter_with(&[("app_2024-01-01.log", "a"), ("b.log", "")]);
        fs::create_dir(dir.path().join("archive")).unwrap();

        let mut names = adapter.list_filenames().unwrap();
        names.sort();
        assert_eq!(names, vec!["app_2024-01-01.log", "b.log"]);
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let adapter = LogFsAdapter::new("/definitely/not/a/log/dir");
        assert!(adapter.list_filenames().unwrap().is_empty());
    }

    #[test]
    fn counts_unterminated_last_line() {
        let (_dir, adapter) = adapter_with(&[
            ("a.log", "one\ntwo\nthree"),
            ("b.log", "one\ntwo\n"),
            ("empty.log", ""),
        ]);
        assert_eq!(adapter.total_lines("a.log").unwrap(), 3);
        assert_eq!(adapter.total_lines("b.log").unwrap(), 2);
        assert_eq!(adapter.total_lines("empty.log").unwrap(), 0);
    }

    #[test]
    fn reads_requested_page() {
        let body = (1..=7).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\r\n");
        let (_dir, adapter) = adapter_with(&[("app.log", body.as_str())]);

        assert_eq!(adapter.read_page("app.log", 1, 3).unwrap(), vec!["line 1", "line 2", "line 3"]);
        assert_eq!(adapter.read_page("app.log", 3, 3).unwrap(), vec!["line 7"]);
        assert!(adapter.read_page("app.log", 4, 3).unwrap().is_empty());
        // clamped to the first page of one line
        assert_eq!(adapter.read_page("app.log", 0, 0).unwrap(), vec!["line 1"]);
    }

    #[test]
    fn keeps_blank_lines_and_lossy_bytes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("raw.log"), b"first\n\n\xffend\n").unwrap();
        let adapter = LogFsAdapter::new(dir.path());

        let lines = adapter.read_page("raw.log", 1, 10).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "");
        assert!(lines[2].ends_with("end"));
    }

    #[test]
    fn rejects_escaping_names() {
        let (_dir, adapter) = adapter_with(&[("a.log", "x")]);
        for name in ["", "..", "../etc/passwd", "sub/a.log", "a\\b", "."] {
            let err = adapter.has_file(name).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<LogFileError>(),
                Some(LogFileError::InvalidFilename(_))
            ));
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let (_dir, adapter) = adapter_with(&[]);
        let err = adapter.total_lines("nope.log").unwrap_err();
        assert!(matches!(err.downcast_ref::<LogFileError>(), Some(LogFileError::NotFound(_))));
        assert!(!adapter.has_file("nope.log").unwrap());
    }

    #[test]
    fn unreadable_directory_is_io_error() {
        let (dir, _adapter) = adapter_with(&[("plain.log", "x")]);
        let adapter = LogFsAdapter::new(dir.path().join("plain.log"));

        let err = adapter.list_filenames().unwrap_err();
        assert!(matches!(err.downcast_ref::<LogFileError>(), Some(LogFileError::Io(_))));
    }

    #[test]
    fn deletes_files_and_ignores_missing() {
        let (dir, adapter) = adapter_with(&[("old.log", "x")]);
        adapter.delete("old.log").unwrap();
        assert!(!dir.path().join("old.log").exists());
        adapter.delete("old.log").unwrap();
    }
}
