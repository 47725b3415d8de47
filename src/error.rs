//! HTTP failure model and error-to-message mapping.
//! Every REST collaborator funnels its failures through `HttpFailure`; the
//! mapping helpers turn a status plus the backend's error envelope into the
//! human message shown to the user. Reporting never consumes the failure;
//! callers always get it back so they can reset their own state.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Error envelope the backend attaches to non-2xx responses. Every field is
/// optional; a body that fails to parse at all is treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiErrorBody {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub details: Option<String>,
    pub status_code: Option<u16>,
    /// Field name -> validation messages, as produced by the backend's
    /// request validation.
    pub errors: Option<BTreeMap<String, Vec<String>>>,
    pub trace_id: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

impl ApiErrorBody {
    pub fn has_field_errors(&self) -> bool {
        self.errors.as_ref().map(|e| !e.is_empty()).unwrap_or(false)
    }
}

/// A failed API call: either the request never completed, or the backend
/// answered with a non-success status and (possibly) an error envelope.
#[derive(Debug, thiserror::Error)]
pub enum HttpFailure {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status}: {}", .body.message.as_deref().unwrap_or("no message"))]
    Status { status: u16, body: ApiErrorBody },
}

impl HttpFailure {
    /// Status code of the failure; transport-level failures report 0, the
    /// conventional "network unreachable" status.
    pub fn status(&self) -> u16 {
        match self {
            HttpFailure::Transport(_) => 0,
            HttpFailure::Status { status, .. } => *status,
        }
    }

    pub fn body(&self) -> Option<&ApiErrorBody> {
        match self {
            HttpFailure::Transport(_) => None,
            HttpFailure::Status { body, .. } => Some(body),
        }
    }
}

/// Map a failure to the message shown to the user. Known statuses carry
/// curated messages (with the backend's own message winning where present);
/// anything else falls back to `default`.
pub fn http_error_message(failure: &HttpFailure, default: &str) -> String {
    let status = failure.status();
    let body = failure.body();
    let backend_message = || body.and_then(|b| b.message.clone());

    match status {
        0 => "Network error: Please check your internet connection".to_string(),
        400 => body
            .and_then(bad_request_message)
            .unwrap_or_else(|| "Bad request: Please check your input data".to_string()),
        401 => backend_message().unwrap_or_else(|| "Unauthorized: Please login again".to_string()),
        403 => backend_message().unwrap_or_else(|| {
            "Forbidden: You don't have permission to perform this action".to_string()
        }),
        404 => backend_message()
            .unwrap_or_else(|| "Not found: The requested resource was not found".to_string()),
        409 => backend_message()
            .unwrap_or_else(|| "Conflict: This action would create a conflict".to_string()),
        429 => backend_message()
            .unwrap_or_else(|| "Too many requests: Please try again later".to_string()),
        500 => backend_message().unwrap_or_else(|| "Server error: Please try again later".to_string()),
        503 => backend_message().unwrap_or_else(|| {
            "Service unavailable: The server is temporarily unavailable".to_string()
        }),
        _ => backend_message().unwrap_or_else(|| default.to_string()),
    }
}

/// 400-specific drill-down: field validation errors first, then the backend's
/// message, then its details.
fn bad_request_message(body: &ApiErrorBody) -> Option<String> {
    if body.has_field_errors() {
        return Some(validation_error_message(body));
    }
    body.message.clone().or_else(|| body.details.clone())
}

/// Render validation errors as one bullet line per field.
pub fn validation_error_message(body: &ApiErrorBody) -> String {
    let Some(errors) = body.errors.as_ref().filter(|e| !e.is_empty()) else {
        return "Validation error: Please check your input".to_string();
    };
    let lines = errors
        .iter()
        .map(|(field, messages)| {
            format!("\u{2022} {}: {}", format_field_name(field), messages.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("Validation errors:\n{lines}")
}

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new("([A-Z])").expect("static regex"));

/// Turn a camelCase backend field name into words for display:
/// `departmentId` -> `Department Id`.
pub fn format_field_name(field: &str) -> String {
    let spaced = CAMEL_BOUNDARY.replace_all(field, " $1");
    let spaced = spaced.trim();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_failure(status: u16, body: ApiErrorBody) -> HttpFailure {
        HttpFailure::Status { status, body }
    }

    #[test]
    fn known_statuses_have_curated_messages() {
        let f = status_failure(404, ApiErrorBody::default());
        assert_eq!(
            http_error_message(&f, "fallback"),
            "Not found: The requested resource was not found"
        );
        let f = status_failure(503, ApiErrorBody::default());
        assert!(http_error_message(&f, "fallback").starts_with("Service unavailable"));
        let f = status_failure(418, ApiErrorBody::default());
        assert_eq!(http_error_message(&f, "fallback"), "fallback");
    }

    #[test]
    fn backend_message_wins_over_curated_text() {
        let body = ApiErrorBody { message: Some("token expired".into()), ..Default::default() };
        let f = status_failure(401, body);
        assert_eq!(http_error_message(&f, "fallback"), "token expired");
    }

    #[test]
    fn bad_request_prefers_field_errors_then_message_then_details() {
        let mut errors = BTreeMap::new();
        errors.insert("fullName".to_string(), vec!["must not be empty".to_string()]);
        let body = ApiErrorBody {
            errors: Some(errors),
            message: Some("ignored".into()),
            ..Default::default()
        };
        let msg = http_error_message(&status_failure(400, body), "fallback");
        assert_eq!(msg, "Validation errors:\n\u{2022} Full Name: must not be empty");

        let body = ApiErrorBody { details: Some("age is required".into()), ..Default::default() };
        assert_eq!(http_error_message(&status_failure(400, body), "f"), "age is required");

        let msg = http_error_message(&status_failure(400, ApiErrorBody::default()), "f");
        assert_eq!(msg, "Bad request: Please check your input data");
    }

    #[test]
    fn validation_message_joins_multiple_fields_and_messages() {
        let mut errors = BTreeMap::new();
        errors.insert("age".to_string(), vec!["too small".to_string(), "not a number".to_string()]);
        errors.insert("departmentId".to_string(), vec!["unknown".to_string()]);
        let body = ApiErrorBody { errors: Some(errors), ..Default::default() };
        let msg = validation_error_message(&body);
        assert_eq!(
            msg,
            "Validation errors:\n\u{2022} Age: too small, not a number\n\u{2022} Department Id: unknown"
        );
    }

    #[test]
    fn field_name_formatting() {
        assert_eq!(format_field_name("fullName"), "Full Name");
        assert_eq!(format_field_name("departmentId"), "Department Id");
        assert_eq!(format_field_name("email"), "Email");
        assert_eq!(format_field_name(""), "");
    }

    #[test]
    fn envelope_parses_backend_shape() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"success":false,"message":"bad","statusCode":400,
                "errors":{"fullName":["required"]},"traceId":"t-1","type":"validation"}"#,
        )
        .unwrap();
        assert_eq!(body.status_code, Some(400));
        assert!(body.has_field_errors());
        assert_eq!(body.error_type.as_deref(), Some("validation"));
    }
}
