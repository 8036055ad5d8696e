use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Severity carried by a structured log line (`logtype` in the source JSON).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref().trim().to_lowercase().as_str() {
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Debug => "debug",
        }
    }
}

/// One displayable log line.
///
/// `line_number` is the absolute position of the line in its file and is only
/// assigned when a page is assembled; a freshly normalized record carries `0`.
/// An empty `project` marks a plain-text line rather than a structured entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub line_number: i64,
    pub logger_name: String,
    pub request_id: String,
    pub project: String,
    /// UUID-shaped, never validated.
    pub message_id: String,
    pub log_level: LogLevel,
    pub message: String,
    /// Unix epoch milliseconds.
    pub timestamp_millis: i64,
}

impl LogRecord {
    /// Record for a line that is not a structured entry: only the message is kept.
    pub fn plain_text(raw: &str) -> Self {
        Self {
            message: raw.to_string(),
            ..Self::default()
        }
    }

    pub fn is_structured(&self) -> bool {
        !self.project.is_empty()
    }

    /// Single-line rendering used by the dashboard list.
    ///
    /// Structured entries read `<date> <time> :: <request id> :: [LEVEL] <message>`,
    /// plain-text lines are returned verbatim.
    pub fn display_line(&self) -> String {
        if !self.is_structured() {
            return self.message.clone();
        }

        let when = DateTime::from_timestamp_millis(self.timestamp_millis)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();

        format!(
            "{} :: {} :: [{}] {}",
            when,
            self.request_id,
            self.log_level.as_code().to_uppercase(),
            self.message
        )
    }
}
