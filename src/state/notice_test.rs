use super::*;

#[test]
fn notice_state_default_is_empty() {
    let state = NoticeState::default();
    assert!(state.current.is_none());
    assert_eq!(state.seq, 0);
}

#[test]
fn push_replaces_current_and_bumps_seq() {
    let mut state = NoticeState::default();
    state.push(Notice::error("Upload Failed (500)", "An error occurred during upload."));
    state.push(Notice::success("Upload Successful!", "File uploaded."));
    assert_eq!(state.seq, 2);
    assert_eq!(state.current.as_ref().map(|n| n.kind), Some(NoticeKind::Success));
}

#[test]
fn dismiss_clears_current_but_keeps_seq() {
    let mut state = NoticeState::default();
    state.push(Notice::error_title("Authentication Required"));
    state.dismiss();
    assert!(state.current.is_none());
    assert_eq!(state.seq, 1);
}

#[test]
fn dismiss_if_current_clears_matching_notice() {
    let mut state = NoticeState::default();
    state.push(Notice::success("Rubric Generated", "Your rubric is ready."));
    assert!(state.dismiss_if_current(1));
    assert!(state.current.is_none());
    assert!(!state.dismiss_if_current(1));
}

#[test]
fn dismiss_if_current_keeps_newer_notice() {
    let mut state = NoticeState::default();
    state.push(Notice::success("Registration Successful!", "Please log in."));
    state.push(Notice::error("Login Failed (401)", "Invalid email or password."));
    assert!(!state.dismiss_if_current(1));
    assert_eq!(state.current.as_ref().map(|n| n.title.as_str()), Some("Login Failed (401)"));
}

#[test]
fn error_title_has_no_description() {
    let notice = Notice::error_title("Network Error");
    assert_eq!(notice.description, None);
    assert_eq!(notice.kind.css_modifier(), "notice--error");
}

#[test]
fn from_api_error_status_includes_code_in_title() {
    let err = ApiError::Status { status: 413, message: "File size cannot exceed 25MB.".to_owned() };
    let notice = Notice::from_api_error(&err, "Upload", "Could not connect.");
    assert_eq!(notice.title, "Upload Failed (413)");
    assert_eq!(notice.description.as_deref(), Some("File size cannot exceed 25MB."));
    assert_eq!(notice.kind, NoticeKind::Error);
}

#[test]
fn from_api_error_network_uses_unreachable_text() {
    let err = ApiError::Network("timeout".to_owned());
    let notice = Notice::from_api_error(&err, "Generation", "Could not connect to AI service.");
    assert_eq!(notice.title, "Network Error");
    assert_eq!(notice.description.as_deref(), Some("Could not connect to AI service."));
}

#[test]
fn from_api_error_missing_token_asks_to_log_in() {
    let notice = Notice::from_api_error(&ApiError::MissingToken, "Upload", "unused");
    assert_eq!(notice.title, "Authentication Error");
}
