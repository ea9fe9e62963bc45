use super::*;

// =============================================================
// detail shapes
// =============================================================

#[test]
fn detail_string_returned_verbatim() {
    let body = serde_json::json!({"detail": "Incorrect password"});
    assert_eq!(normalize_error_body(&body), "Incorrect password");
}

#[test]
fn detail_list_joins_msg_fields() {
    let body = serde_json::json!({"detail": [{"msg": "invalid email"}]});
    assert_eq!(normalize_error_body(&body), "invalid email");

    let body = serde_json::json!({
        "detail": [
            {"msg": "invalid email", "loc": ["body", "username"]},
            {"msg": "field required"}
        ]
    });
    assert_eq!(normalize_error_body(&body), "invalid email, field required");
}

#[test]
fn detail_list_entry_without_msg_dumps_entry() {
    let body = serde_json::json!({"detail": [{"loc": ["body"]}]});
    assert_eq!(normalize_error_body(&body), r#"{"loc":["body"]}"#);
}

#[test]
fn detail_non_string_non_list_dumps_detail() {
    let body = serde_json::json!({"detail": {"code": 42}});
    assert_eq!(normalize_error_body(&body), r#"{"code":42}"#);
}

#[test]
fn missing_detail_dumps_whole_body() {
    let body = serde_json::json!({"error": "boom"});
    assert_eq!(normalize_error_body(&body), r#"{"error":"boom"}"#);
}

// =============================================================
// raw-text fallback
// =============================================================

#[test]
fn unparseable_body_uses_operation_fallback() {
    assert_eq!(
        normalize_error_text("<html>502</html>", "Login"),
        "Login failed (invalid error response)"
    );
}

#[test]
fn parseable_body_goes_through_detail_path() {
    assert_eq!(
        normalize_error_text(r#"{"detail":"Email already registered"}"#, "Registration"),
        "Email already registered"
    );
}

#[test]
fn api_error_display_is_message_only() {
    let err = ApiError::http(422, "invalid email");
    assert_eq!(err.to_string(), "invalid email");
    assert_eq!(err.status, Some(422));

    let err = ApiError::network("connection refused");
    assert!(err.status.is_none());
}
