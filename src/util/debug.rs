//! Console debugging hooks for the auth session.
//!
//! In browser builds `window.debugAuth()` logs and returns a snapshot of the
//! session plus the raw persisted record, and `window.resetAuth()` clears the
//! session. Tokens are redacted in both. Manual inspection only; nothing in
//! the app depends on these.

#[cfg(test)]
#[path = "debug_test.rs"]
mod debug_test;

use serde_json::{Value, json};

use crate::state::session::SessionState;

const REDACTED: &str = "***";

/// JSON snapshot of `state` and the stored record, with tokens redacted.
pub fn describe(state: &SessionState, raw_record: Option<&str>) -> Value {
    json!({
        "isLoading": state.is_loading(),
        "isAuthenticated": state.is_authenticated(),
        "user": state.user(),
        "tokenPresent": state.token().is_some(),
        "storedRecord": raw_record.map(redact_record),
    })
}

/// Parse a stored record and mask its token. Unparsable records are reported
/// as an error string instead.
fn redact_record(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(mut value) => {
            if let Some(token) = value.pointer_mut("/state/token")
                && !token.is_null()
            {
                *token = Value::String(REDACTED.to_owned());
            }
            value
        }
        Err(err) => json!({ "error": format!("unparsable record: {err}") }),
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;

    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use super::describe;
    use crate::state::session_context::SessionContext;

    thread_local! {
        static SESSION: Cell<Option<SessionContext>> = const { Cell::new(None) };
    }

    fn snapshot(session: SessionContext) -> JsValue {
        let value = describe(&session.state_untracked(), session.raw_record_untracked().as_deref());
        log::info!("=== AUTH STATE DEBUG ===\n{value:#}");
        js_sys::JSON::parse(&value.to_string()).unwrap_or(JsValue::NULL)
    }

    fn debug_auth() -> JsValue {
        match SESSION.with(Cell::get) {
            Some(session) => snapshot(session),
            None => JsValue::NULL,
        }
    }

    fn reset_auth() -> JsValue {
        match SESSION.with(Cell::get) {
            Some(session) => {
                session.clear_auth();
                log::info!("auth state has been reset");
                snapshot(session)
            }
            None => JsValue::NULL,
        }
    }

    /// Remember `session` and expose the hooks on `window`.
    pub(crate) fn register(session: SessionContext) {
        SESSION.with(|s| s.set(Some(session)));
        let Some(window) = web_sys::window() else {
            return;
        };
        for (name, hook) in [("debugAuth", debug_auth as fn() -> JsValue), ("resetAuth", reset_auth)] {
            let closure = Closure::<dyn Fn() -> JsValue>::new(hook);
            if js_sys::Reflect::set(&window, &JsValue::from_str(name), closure.as_ref()).is_err() {
                log::warn!("debug: failed to install window.{name}");
            }
            closure.forget();
        }
    }
}

#[cfg(feature = "hydrate")]
pub(crate) use browser::register;
