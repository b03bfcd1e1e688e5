//! Transient user-facing notices (toasts).
//!
//! DESIGN
//! ======
//! Screens report outcomes of remote calls and guard redirects here instead of
//! owning their own banners; `NoticeBanner` renders the latest one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::net::error::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "notice--info",
            Self::Success => "notice--success",
            Self::Error => "notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: Some(description.into()), kind: NoticeKind::Success }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: Some(description.into()), kind: NoticeKind::Error }
    }

    /// Error notice with a title only.
    pub fn error_title(title: impl Into<String>) -> Self {
        Self { title: title.into(), description: None, kind: NoticeKind::Error }
    }

    /// Notice for a failed remote call. `action` names the operation in
    /// titles (e.g. `"Upload"` gives `"Upload Failed (500)"`).
    pub fn from_api_error(err: &ApiError, action: &str, unreachable: &str) -> Self {
        match err {
            ApiError::Status { status, message } => Self::error(format!("{action} Failed ({status})"), message.clone()),
            ApiError::MissingToken => Self::error("Authentication Error", "Token not found. Please log in again."),
            ApiError::Network(_) | ApiError::Unavailable => Self::error("Network Error", unreachable),
            ApiError::Decode(detail) => Self::error(format!("{action} Failed"), detail.clone()),
        }
    }
}

/// Latest notice plus a sequence number identifying it, so a delayed
/// auto-dismiss only removes the notice it was scheduled for.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    pub seq: u64,
}

impl NoticeState {
    pub fn push(&mut self, notice: Notice) {
        self.current = Some(notice);
        self.seq += 1;
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Dismiss only if `seq` still identifies the current notice.
    pub fn dismiss_if_current(&mut self, seq: u64) -> bool {
        if self.seq != seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}
