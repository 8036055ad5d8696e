use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Value};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn health() -> Result<Value> {
    Ok(json!({
        "status": "Healthy and kicking!",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn version() -> Result<Value> {
    Ok(json!({ "version": VERSION }))
}
