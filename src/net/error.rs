//! Normalization of backend error bodies into display strings.
//!
//! The backend reports failures with an optional `detail` field that is
//! either a plain string or a list of `{msg, ...}` objects. Anything
//! else degrades to a JSON dump of the whole body instead of crashing.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed API call, normalized to a single human-readable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    /// HTTP status, or `None` for transport-level failures.
    pub status: Option<u16>,
}

impl ApiError {
    /// Transport-level failure (connection refused, DNS, aborted, ...).
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Non-2xx response whose body has already been normalized.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Extract a display message from an error response body.
///
/// - `detail` string: returned verbatim.
/// - `detail` array: each element's `msg` (or the element's JSON dump
///   when `msg` is absent), joined by `", "`.
/// - `detail` absent or any other shape: JSON dump of the whole body.
pub fn normalize_error_body(body: &serde_json::Value) -> String {
    match body.get("detail") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .map(|item| match item.get("msg").and_then(|m| m.as_str()) {
                Some(msg) => msg.to_owned(),
                None => item.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
        None => body.to_string(),
    }
}

/// Normalize a raw error body, falling back to a fixed per-operation
/// message when the body is not valid JSON.
pub fn normalize_error_text(raw: &str, operation: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(body) => normalize_error_body(&body),
        Err(_) => format!("{operation} failed (invalid error response)"),
    }
}
