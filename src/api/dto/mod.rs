//! API DTOs shared by the controllers.

use serde::Serialize;

pub mod log_dto;

/// Envelope for system payloads and for every error body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub is_successful: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            is_successful: true,
            data: Some(data),
            error_code: None,
            error_msg: None,
        }
    }

    pub fn err(error_code: impl Into<String>, error_msg: impl Into<String>) -> Self {
        Self {
            is_successful: false,
            data: None,
            error_code: Some(error_code.into()),
            error_msg: Some(error_msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_envelope_has_no_data() {
        let body = serde_json::to_value(ApiResponse::<()>::err("NOT_FOUND", "gone")).unwrap();
        assert_eq!(
            body,
            json!({ "is_successful": false, "data": null, "error_code": "NOT_FOUND", "error_msg": "gone" })
        );
    }

    #[test]
    fn ok_envelope_omits_error_fields() {
        let body = serde_json::to_value(ApiResponse::ok(json!({ "version": "1" }))).unwrap();
        assert_eq!(body, json!({ "is_successful": true, "data": { "version": "1" } }));
    }
}
