use super::*;
use crate::net::types::User;
use crate::state::session::{SESSION_STORAGE_KEY, SessionStore};
use crate::util::storage::{MemoryStorage, SessionStorage as _};

fn user() -> User {
    serde_json::from_value(serde_json::json!({
        "id": 5, "email": "yaw@example.com", "first_name": "Yaw", "role": "teacher"
    }))
    .unwrap()
}

#[test]
fn describe_loading_empty_session() {
    let value = describe(&SessionState::default(), None);
    assert_eq!(value["isLoading"], true);
    assert_eq!(value["isAuthenticated"], false);
    assert_eq!(value["user"], serde_json::Value::Null);
    assert_eq!(value["tokenPresent"], false);
    assert_eq!(value["storedRecord"], serde_json::Value::Null);
}

#[test]
fn describe_redacts_token_in_stored_record() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store.set_user_and_token(user(), "secret-token".to_owned()).unwrap();
    let raw = storage.read(SESSION_STORAGE_KEY).unwrap().unwrap();

    let value = describe(store.state(), Some(&raw));

    assert_eq!(value["isAuthenticated"], true);
    assert_eq!(value["tokenPresent"], true);
    assert_eq!(value["user"]["first_name"], "Yaw");
    assert_eq!(value["storedRecord"]["state"]["token"], "***");
    assert!(!value.to_string().contains("secret-token"));
}

#[test]
fn describe_keeps_null_token_null() {
    let value = describe(
        &SessionState::default(),
        Some(r#"{"state":{"user":null,"token":null},"version":0}"#),
    );
    assert_eq!(value["storedRecord"]["state"]["token"], serde_json::Value::Null);
}

#[test]
fn describe_reports_unparsable_record() {
    let value = describe(&SessionState::default(), Some("{oops"));
    let message = value["storedRecord"]["error"].as_str().unwrap();
    assert!(message.starts_with("unparsable record"));
}
