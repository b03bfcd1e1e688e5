//! Remote service endpoints resolved at build time.
//!
//! A WASM bundle has no process environment at runtime, so base URLs are
//! captured with `option_env!` when the crate is compiled:
//!
//! - `LEARNBRIDGE_AUTH_URL`: auth service (default: same origin)
//! - `LEARNBRIDGE_CONTENT_URL`: content/upload service
//! - `LEARNBRIDGE_AI_URL`: AI generation service

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTH_BASE_URL: &str = "";
pub const DEFAULT_CONTENT_BASE_URL: &str = "http://localhost:3003";
pub const DEFAULT_AI_BASE_URL: &str = "https://learnbridge-ai-service.onrender.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub auth_base_url: String,
    pub content_base_url: String,
    pub ai_base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl ServiceConfig {
    /// Build config from the variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("LEARNBRIDGE_AUTH_URL"),
            option_env!("LEARNBRIDGE_CONTENT_URL"),
            option_env!("LEARNBRIDGE_AI_URL"),
        )
    }

    pub fn from_values(auth: Option<&str>, content: Option<&str>, ai: Option<&str>) -> Self {
        Self {
            auth_base_url: resolve_base_url(auth, DEFAULT_AUTH_BASE_URL),
            content_base_url: resolve_base_url(content, DEFAULT_CONTENT_BASE_URL),
            ai_base_url: resolve_base_url(ai, DEFAULT_AI_BASE_URL),
        }
    }
}

/// Trim `raw`, drop trailing slashes, and fall back to `default` when blank.
fn resolve_base_url(raw: Option<&str>, default: &str) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    value.trim_end_matches('/').to_owned()
}

/// Join a base URL and an absolute path.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
