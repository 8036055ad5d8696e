use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogFileError {
    #[error("Unable to find file with name {0}")]
    NotFound(String),

    #[error("Invalid log filename: {0}")]
    InvalidFilename(String),

    #[error("Log file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
