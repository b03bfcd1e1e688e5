//! REST helpers for the auth, content, and AI services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Authenticated calls take
//! the session token and fail with [`ApiError::MissingToken`] before any
//! network traffic when there is none; callers route every error through
//! `SessionContext::handle_api_error` so rejected tokens clear the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthResponse, RegisterRequest, RubricRequest};
#[cfg(any(test, feature = "hydrate"))]
use crate::config::{ServiceConfig, endpoint};

/// Value of the `Authorization` header for `token`.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Borrow the token or fail with [`ApiError::MissingToken`].
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] when `token` is absent or blank.
pub fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
    token.filter(|t| !t.trim().is_empty()).ok_or(ApiError::MissingToken)
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(cfg: &ServiceConfig) -> String {
    endpoint(&cfg.auth_base_url, "/api/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(cfg: &ServiceConfig) -> String {
    endpoint(&cfg.auth_base_url, "/api/auth/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn rubric_endpoint(cfg: &ServiceConfig) -> String {
    endpoint(&cfg.ai_base_url, "/api/ai/generate/rubric")
}

#[cfg(any(test, feature = "hydrate"))]
fn sbc_upload_endpoint(cfg: &ServiceConfig) -> String {
    endpoint(&cfg.content_base_url, "/api/content/upload/sbc")
}

/// Multipart field name the content service expects for SBC uploads.
pub const SBC_UPLOAD_FIELD: &str = "sbcFile";

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response, fallback: &str) -> ApiError {
    let status = resp.status();
    let body = resp.json::<serde_json::Value>().await.unwrap_or(serde_json::Value::Null);
    let err = ApiError::Status { status, message: super::error::error_message(&body, fallback) };
    log::warn!("api: {err}");
    err
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server rejects the
/// credentials, or the response body is malformed.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = login_endpoint(&ServiceConfig::from_build_env());
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(failure(resp, "Invalid email or password.").await);
        }
        resp.json::<AuthResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects the
/// registration (e.g. email already in use).
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = register_endpoint(&ServiceConfig::from_build_env());
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(failure(resp, "An error occurred. Please try again.").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Generate a markdown rubric via `POST /api/ai/generate/rubric`.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] without a token, otherwise an
/// [`ApiError`] if the request or response handling fails.
pub async fn generate_rubric(token: Option<&str>, request: &RubricRequest) -> Result<String, ApiError> {
    let token = require_token(token)?;
    #[cfg(feature = "hydrate")]
    {
        let url = rubric_endpoint(&ServiceConfig::from_build_env());
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer_header(token))
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(failure(resp, "An error occurred generating the rubric.").await);
        }
        let body: super::types::RubricResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.rubric)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

/// Upload an SBC curriculum PDF via `POST /api/content/upload/sbc`.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] without a token, otherwise an
/// [`ApiError`] if the multipart body cannot be built or the upload fails.
#[cfg(feature = "hydrate")]
pub async fn upload_sbc(
    token: Option<&str>,
    file: &web_sys::File,
) -> Result<super::types::UploadResponse, ApiError> {
    let token = require_token(token)?;
    let url = sbc_upload_endpoint(&ServiceConfig::from_build_env());
    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob(SBC_UPLOAD_FIELD, file)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let resp = gloo_net::http::Request::post(&url)
        .header("Authorization", &bearer_header(token))
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    if !resp.ok() {
        return Err(failure(resp, "An error occurred during upload.").await);
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}
