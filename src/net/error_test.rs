use super::*;

#[test]
fn unauthorized_status_is_auth_rejection() {
    let err = ApiError::Status { status: 401, message: "Invalid token".to_owned() };
    assert!(err.is_auth_rejection());
}

#[test]
fn missing_token_is_auth_rejection() {
    assert!(ApiError::MissingToken.is_auth_rejection());
}

#[test]
fn forbidden_and_server_errors_keep_session() {
    assert!(!ApiError::Status { status: 403, message: String::new() }.is_auth_rejection());
    assert!(!ApiError::Status { status: 500, message: String::new() }.is_auth_rejection());
    assert!(!ApiError::Network("offline".to_owned()).is_auth_rejection());
    assert!(!ApiError::Unavailable.is_auth_rejection());
}

#[test]
fn status_display_includes_code_and_message() {
    let err = ApiError::Status { status: 409, message: "Email already registered".to_owned() };
    assert_eq!(err.to_string(), "request failed (409): Email already registered");
}

#[test]
fn error_message_prefers_error_field() {
    let body = serde_json::json!({ "error": "File too large", "message": "ignored" });
    assert_eq!(error_message(&body, "fallback"), "File too large");
}

#[test]
fn error_message_falls_back_to_message_field() {
    let body = serde_json::json!({ "message": "Bad credentials" });
    assert_eq!(error_message(&body, "fallback"), "Bad credentials");
}

#[test]
fn error_message_uses_fallback_for_missing_or_blank() {
    assert_eq!(error_message(&serde_json::json!({}), "An error occurred."), "An error occurred.");
    assert_eq!(error_message(&serde_json::json!({ "error": "  " }), "fallback"), "fallback");
    assert_eq!(error_message(&serde_json::Value::Null, "fallback"), "fallback");
}
