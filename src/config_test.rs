use super::*;

#[test]
fn defaults_apply_when_unset() {
    let cfg = ServiceConfig::from_values(None, None, None);
    assert_eq!(cfg.auth_base_url, DEFAULT_AUTH_BASE_URL);
    assert_eq!(cfg.content_base_url, DEFAULT_CONTENT_BASE_URL);
    assert_eq!(cfg.ai_base_url, DEFAULT_AI_BASE_URL);
    assert_eq!(cfg, ServiceConfig::default());
}

#[test]
fn overrides_are_trimmed_and_lose_trailing_slash() {
    let cfg = ServiceConfig::from_values(
        Some(" https://auth.example.test/ "),
        Some("https://content.example.test//"),
        Some("https://ai.example.test"),
    );
    assert_eq!(cfg.auth_base_url, "https://auth.example.test");
    assert_eq!(cfg.content_base_url, "https://content.example.test");
    assert_eq!(cfg.ai_base_url, "https://ai.example.test");
}

#[test]
fn blank_override_falls_back_to_default() {
    let cfg = ServiceConfig::from_values(Some("   "), Some(""), None);
    assert_eq!(cfg.auth_base_url, DEFAULT_AUTH_BASE_URL);
    assert_eq!(cfg.content_base_url, DEFAULT_CONTENT_BASE_URL);
}

#[test]
fn endpoint_joins_same_origin_base() {
    assert_eq!(endpoint("", "/api/auth/login"), "/api/auth/login");
}

#[test]
fn endpoint_joins_absolute_base() {
    assert_eq!(
        endpoint("http://localhost:3003/", "/api/content/upload/sbc"),
        "http://localhost:3003/api/content/upload/sbc"
    );
    assert_eq!(
        endpoint("https://ai.example.test", "api/ai/generate/rubric"),
        "https://ai.example.test/api/ai/generate/rubric"
    );
}
