//! Error type for remote service calls.
//!
//! ERROR HANDLING
//! ==============
//! Screens surface these as notices; only authentication rejections feed back
//! into the session store (see [`ApiError::is_auth_rejection`]).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures from auth, content, and AI service requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("could not connect to the server: {0}")]
    Network(String),

    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("token not found; please log in again")]
    MissingToken,

    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// `true` when the credential was missing or rejected and the session
    /// should be cleared.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::MissingToken | Self::Status { status: 401, .. })
    }
}

/// Pull the server's `error` message out of a JSON error body.
pub fn error_message(body: &serde_json::Value, fallback: &str) -> String {
    body.get("error")
        .or_else(|| body.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}
