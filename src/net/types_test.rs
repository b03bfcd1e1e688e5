use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: 7,
        email: "ama@example.com".to_owned(),
        first_name: "Ama".to_owned(),
        surname: Some("Mensah".to_owned()),
        role: "teacher".to_owned(),
        school: Some("Accra High School".to_owned()),
        location: None,
        phone: None,
        gender: Some("Female".to_owned()),
        email_verified: true,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-02T00:00:00Z".to_owned(),
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_serde_round_trip() {
    let user = make_user();
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn user_deserializes_minimal_legacy_record() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "email": "a@b.com",
        "first_name": "Kwame",
        "role": "admin"
    }))
    .unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.surname, None);
    assert!(!user.email_verified);
    assert!(user.created_at.is_empty());
    assert_eq!(user.role(), Some(Role::Admin));
}

#[test]
fn user_id_accepts_integral_float_and_numeric_string() {
    let from_float: User = serde_json::from_value(serde_json::json!({
        "id": 3.0, "email": "x@y.z", "first_name": "X", "role": "student"
    }))
    .unwrap();
    assert_eq!(from_float.id, 3);

    let from_string: User = serde_json::from_value(serde_json::json!({
        "id": "42", "email": "x@y.z", "first_name": "X", "role": "student"
    }))
    .unwrap();
    assert_eq!(from_string.id, 42);
}

#[test]
fn user_id_rejects_fractional_number() {
    let result = serde_json::from_value::<User>(serde_json::json!({
        "id": 1.5, "email": "x@y.z", "first_name": "X", "role": "student"
    }));
    assert!(result.is_err());
}

#[test]
fn user_display_name_joins_surname() {
    assert_eq!(make_user().display_name(), "Ama Mensah");
    let mut user = make_user();
    user.surname = Some("  ".to_owned());
    assert_eq!(user.display_name(), "Ama");
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_is_case_insensitive() {
    assert_eq!(Role::parse("Admin"), Some(Role::Admin));
    assert_eq!(Role::parse(" TEACHER "), Some(Role::Teacher));
    assert_eq!(Role::parse("student"), Some(Role::Student));
}

#[test]
fn role_parse_unknown_is_none() {
    assert_eq!(Role::parse("principal"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_as_str_parses_back() {
    for role in [Role::Teacher, Role::Student, Role::Admin] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn register_request_uses_camel_case_and_skips_blank_optionals() {
    let req = RegisterRequest {
        first_name: "Kwame".to_owned(),
        surname: "Nkrumah".to_owned(),
        email: "k@example.com".to_owned(),
        phone: None,
        school: Some("Achimota".to_owned()),
        location: None,
        position: "Teacher".to_owned(),
        gender: "Male".to_owned(),
        password: "secret1".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["firstName"], "Kwame");
    assert_eq!(value["school"], "Achimota");
    assert!(value.get("phone").is_none());
    assert!(value.get("location").is_none());
}

#[test]
fn rubric_request_omits_missing_max_score() {
    let req = RubricRequest {
        assessment_title: "Photosynthesis essay".to_owned(),
        assessment_type: "Essay".to_owned(),
        class_level: "JHS 2".to_owned(),
        task_description: "Explain the light-dependent reactions.".to_owned(),
        max_score: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["assessmentTitle"], "Photosynthesis essay");
    assert!(value.get("maxScore").is_none());
}

#[test]
fn upload_response_reads_camel_case_file_path() {
    let resp: UploadResponse = serde_json::from_str(r#"{"filePath":"uploads/sbc.pdf"}"#).unwrap();
    assert_eq!(resp.file_path, "uploads/sbc.pdf");
}
