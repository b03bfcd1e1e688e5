//! Authentication session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route guard and API-calling screen reads the session from here and
//! calls back into two actions: [`SessionStore::set_user_and_token`] after a
//! successful login, and [`SessionStore::clear_auth`] on logout or when a
//! remote call rejects the token.
//!
//! PERSISTENCE
//! ===========
//! Only `user` and `token` are written, as one JSON record under
//! [`SESSION_STORAGE_KEY`]. Every mutating action writes through. The
//! authenticated flag is derived on read and the loading flag is process
//! state, so neither can go stale through a storage edit.
//!
//! REHYDRATION
//! ===========
//! Startup races the storage read against a [`REHYDRATION_TIMEOUT`] timer.
//! Both completions feed [`SessionStore::apply`]; whichever arrives first
//! releases the loading flag and the other is a no-op for that flag. A read
//! that resolves after the user already logged in or out is discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};
use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::util::storage::{SessionStorage, StorageError, load_json, save_json};

/// Storage key of the persisted session record.
pub const SESSION_STORAGE_KEY: &str = "auth-storage";

/// Ceiling after which the loading flag is released even if the storage read
/// has not resolved.
pub const REHYDRATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Record format version written alongside the persisted pair.
pub const SESSION_RECORD_VERSION: u32 = 0;

/// Errors produced by session actions and rehydration.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("token must not be empty")]
    EmptyToken,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The persisted subset of the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}

/// On-disk envelope: `{"state": {...}, "version": 0}`.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedRecord {
    state: PersistedSession,
    #[serde(default)]
    version: u32,
}

/// Read the persisted pair from `storage`; `None` when nothing is stored.
///
/// # Errors
///
/// Returns [`SessionError::Storage`] if the read fails or the stored record
/// is malformed.
pub fn read_persisted(storage: &impl SessionStorage) -> Result<Option<PersistedSession>, SessionError> {
    let record = load_json::<PersistedRecord>(storage, SESSION_STORAGE_KEY)?;
    Ok(record.map(|r| r.state))
}

/// Which completion released the loading flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingRelease {
    Rehydrated,
    TimedOut,
}

/// A completion delivered during startup rehydration.
#[derive(Debug)]
pub enum RehydrationEvent {
    /// The storage read finished (successfully or not).
    Loaded(Result<Option<PersistedSession>, SessionError>),
    /// The fallback timer fired.
    TimedOut,
}

/// Snapshot of the session as consumers see it.
#[derive(Clone, PartialEq)]
pub struct SessionState {
    user: Option<User>,
    token: Option<String>,
    is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, token: None, is_loading: true }
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("is_authenticated", &self.is_authenticated())
            .field("is_loading", &self.is_loading)
            .finish()
    }
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `true` iff both a user and a token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// `true` only during the startup rehydration window.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Parsed role of the signed-in user.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(User::role)
    }

    pub fn persisted(&self) -> PersistedSession {
        PersistedSession { user: self.user.clone(), token: self.token.clone() }
    }
}

/// Race a storage read against a timeout, delivering each completion to
/// `apply` in the order they happen.
///
/// If the timeout wins, the read is still awaited and its result delivered
/// afterwards. A read that never resolves therefore keeps this future pending,
/// but the loading flag has already been released by the timeout event.
pub async fn race_rehydration<R, T, F>(read: R, timeout: T, mut apply: F)
where
    R: Future<Output = Result<Option<PersistedSession>, SessionError>>,
    T: Future<Output = ()>,
    F: FnMut(RehydrationEvent),
{
    let read = pin!(read);
    let timeout = pin!(timeout);
    match select(read, timeout).await {
        Either::Left((loaded, _timeout)) => apply(RehydrationEvent::Loaded(loaded)),
        Either::Right(((), read)) => {
            apply(RehydrationEvent::TimedOut);
            apply(RehydrationEvent::Loaded(read.await));
        }
    }
}

/// Session state plus the storage it writes through to.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    state: SessionState,
    storage: S,
    mutated: bool,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Empty session, loading, backed by `storage`.
    pub fn new(storage: S) -> Self {
        Self { state: SessionState::default(), storage, mutated: false }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Install a freshly authenticated user and token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for a blank token; the session is
    /// left untouched.
    pub fn set_user_and_token(&mut self, user: User, token: String) -> Result<(), SessionError> {
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        log::info!("session: signed in user {} ({})", user.id, user.role);
        self.state = SessionState { user: Some(user), token: Some(token), is_loading: false };
        self.mutated = true;
        self.persist();
        Ok(())
    }

    /// Reset to the empty, not-loading session. Idempotent.
    pub fn clear_auth(&mut self) {
        log::info!("session: cleared");
        self.state = SessionState { user: None, token: None, is_loading: false };
        self.mutated = true;
        self.persist();
    }

    pub fn set_loading(&mut self, loading: bool) {
        log::debug!("session: loading = {loading}");
        self.state.is_loading = loading;
    }

    /// Release the loading flag. Returns `true` only for the call that
    /// performed the transition.
    pub fn release_loading(&mut self, source: LoadingRelease) -> bool {
        if !self.state.is_loading {
            return false;
        }
        match source {
            LoadingRelease::Rehydrated => log::debug!("session: rehydration released loading"),
            LoadingRelease::TimedOut => log::warn!("session: rehydration timed out; forcing loading off"),
        }
        self.state.is_loading = false;
        true
    }

    /// Read and apply the persisted session synchronously.
    pub fn load(&mut self) {
        let loaded = read_persisted(&self.storage);
        self.apply(RehydrationEvent::Loaded(loaded));
    }

    /// Apply one rehydration completion.
    pub fn apply(&mut self, event: RehydrationEvent) {
        match event {
            RehydrationEvent::TimedOut => {
                self.release_loading(LoadingRelease::TimedOut);
            }
            RehydrationEvent::Loaded(Ok(Some(persisted))) => {
                if self.mutated {
                    log::debug!("session: ignoring late rehydration after a session change");
                } else {
                    self.install(persisted);
                }
                self.release_loading(LoadingRelease::Rehydrated);
            }
            RehydrationEvent::Loaded(Ok(None)) => {
                log::debug!("session: nothing persisted");
                self.release_loading(LoadingRelease::Rehydrated);
            }
            RehydrationEvent::Loaded(Err(err)) => {
                log::error!("session: failed to rehydrate: {err}");
                self.release_loading(LoadingRelease::Rehydrated);
            }
        }
    }

    /// Clear the session if `err` means the token was missing or rejected.
    pub fn handle_api_error(&mut self, err: &ApiError) -> bool {
        if !err.is_auth_rejection() {
            return false;
        }
        log::warn!("session: remote call rejected credentials: {err}");
        self.clear_auth();
        true
    }

    fn install(&mut self, persisted: PersistedSession) {
        let PersistedSession { user, token } = persisted;
        self.state.user = user;
        self.state.token = token.filter(|t| !t.trim().is_empty());
        log::info!("session: rehydrated, authenticated = {}", self.state.is_authenticated());
    }

    fn persist(&self) {
        let record = PersistedRecord { state: self.state.persisted(), version: SESSION_RECORD_VERSION };
        if let Err(err) = save_json(&self.storage, SESSION_STORAGE_KEY, &record) {
            log::warn!("session: failed to persist: {err}");
        }
    }
}
