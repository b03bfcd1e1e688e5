//! Shared DTOs for the auth, content, and AI service boundaries.
//!
//! DESIGN
//! ======
//! These types mirror the JSON bodies the remote services send and accept,
//! so serde round-trips stay lossless and persisted sessions written by older
//! builds (which stored fewer user fields) still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated platform user as returned by the auth service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub email: String,
    pub first_name: String,
    #[serde(default)]
    pub surname: Option<String>,
    /// Raw role string; see [`User::role`] for the parsed form.
    pub role: String,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    /// ISO 8601 creation timestamp. Empty when the source omitted it.
    #[serde(default)]
    pub created_at: String,
    /// ISO 8601 last-update timestamp. Empty when the source omitted it.
    #[serde(default)]
    pub updated_at: String,
}

impl User {
    /// Parsed role, or `None` for role strings this client does not know.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// `"First Surname"`, or just the first name when no surname is set.
    pub fn display_name(&self) -> String {
        match self.surname.as_deref().map(str::trim) {
            Some(surname) if !surname.is_empty() => format!("{} {surname}", self.first_name),
            _ => self.first_name.clone(),
        }
    }
}

/// Platform roles used for navigation filtering and route gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Teacher,
    Student,
    Admin,
}

impl Role {
    /// Parse a role string case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "teacher" => Some(Self::Teacher),
            "student" => Some(Self::Student),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }
}

/// Successful login response: the pair installed into the session store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Registration payload for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub surname: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// One of `Teacher`, `Student`, `Other`.
    pub position: String,
    /// One of `Male`, `Female`, `Other`, `Prefer not to say`.
    pub gender: String,
    pub password: String,
}

/// Rubric generation payload for `POST /api/ai/generate/rubric`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricRequest {
    pub assessment_title: String,
    pub assessment_type: String,
    pub class_level: String,
    pub task_description: String,
    /// Omitted when unset so the AI service applies its own default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
}

/// Rubric generation response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricResponse {
    /// Markdown rubric text.
    pub rubric: String,
}

/// Upload response body from the content service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Server-side storage path of the uploaded file.
    pub file_path: String,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected numeric id, got {text:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
