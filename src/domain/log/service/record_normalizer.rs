//! Turns one raw log line into a `LogRecord`.
//!
//! Lines that look like JSON (`{...}` or `[...]` after trimming) and decode
//! cleanly are structured entries; everything else is kept verbatim as a
//! plain-text message. Decoding failures are never surfaced.

use serde_json::{Map, Value};
use tracing::trace;

use crate::domain::log::model::{LogLevel, LogRecord};

/// Shape of a raw line after the JSON probe.
#[derive(Debug, Clone, PartialEq)]
pub enum LineShape {
    Structured(Value),
    PlainText,
}

/// Probes `raw` for a JSON object or array.
///
/// Only the shape test uses the trimmed text; the caller keeps `raw` untouched.
pub fn classify_line(raw: &str) -> LineShape {
    let trimmed = raw.trim();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return LineShape::PlainText;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) if is_truthy(&value) => LineShape::Structured(value),
        Ok(_) => LineShape::PlainText,
        Err(err) => {
            trace!(error = %err, "line looked like JSON but did not decode");
            LineShape::PlainText
        }
    }
}

/// Normalizes one raw line. Total: every input yields a record.
pub fn normalize(raw: &str) -> LogRecord {
    match classify_line(raw) {
        LineShape::Structured(value) => from_structured(&value),
        LineShape::PlainText => LogRecord::plain_text(raw),
    }
}

/// Normalizes a value handed over already decoded.
///
/// Non-string values are serialized back to JSON text first so they take the
/// exact same path as a string line would.
pub fn normalize_value(value: &Value) -> LogRecord {
    match value {
        Value::String(s) => normalize(s),
        other => normalize(&other.to_string()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn from_structured(value: &Value) -> LogRecord {
    // A JSON array carries no named fields; every field keeps its default.
    let Some(fields) = value.as_object() else {
        return LogRecord::default();
    };

    LogRecord {
        line_number: 0,
        logger_name: string_field(fields, "loggerName"),
        request_id: string_field(fields, "requestId"),
        project: string_field(fields, "project"),
        message_id: string_field(fields, "messageId"),
        log_level: fields
            .get("logtype")
            .and_then(Value::as_str)
            .and_then(LogLevel::from_code)
            .unwrap_or_default(),
        message: string_field(fields, "message"),
        timestamp_millis: timestamp_field(fields, "timestamp"),
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn timestamp_field(fields: &Map<String, Value>, key: &str) -> i64 {
    match fields.get(key) {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .unwrap_or(0)
}
