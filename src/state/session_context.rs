//! Reactive session context injected at the application root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the [`SessionStore`] in a Leptos signal so guards and screens re-run
//! when the session changes. Created once by `App`, then read everywhere via
//! [`use_session`].

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::User;
use crate::state::session::{SessionError, SessionState, SessionStore};
use crate::util::storage::BrowserStorage;

/// Copyable handle to the process-wide session store.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore<BrowserStorage>>,
}

impl SessionContext {
    pub fn new(storage: BrowserStorage) -> Self {
        Self { store: RwSignal::new(SessionStore::new(storage)) }
    }

    /// Start rehydration. In the browser the storage read races the
    /// fallback timer; on the server this is a no-op and the session stays
    /// loading, so SSR renders the same neutral view the client starts with.
    pub fn init(self) {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::session::{REHYDRATION_TIMEOUT, race_rehydration, read_persisted};

            let store = self.store;
            let storage = store.with_untracked(|s| *s.storage());
            leptos::task::spawn_local(async move {
                let read = async move { read_persisted(&storage) };
                let timeout = gloo_timers::future::sleep(REHYDRATION_TIMEOUT);
                race_rehydration(read, timeout, move |event| store.update(move |s| s.apply(event))).await;
            });
            crate::util::debug::register(self);
        }
    }

    /// Tracked snapshot of the session.
    pub fn state(self) -> SessionState {
        self.store.with(|s| s.state().clone())
    }

    pub fn state_untracked(self) -> SessionState {
        self.store.with_untracked(|s| s.state().clone())
    }

    pub fn token_untracked(self) -> Option<String> {
        self.store.with_untracked(|s| s.state().token().map(str::to_owned))
    }

    /// Install the user and token from a successful login.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for a blank token.
    pub fn set_user_and_token(self, user: User, token: String) -> Result<(), SessionError> {
        let mut result = Ok(());
        self.store.update(|s| result = s.set_user_and_token(user, token));
        result
    }

    pub fn clear_auth(self) {
        self.store.update(SessionStore::clear_auth);
    }

    /// Clear the session when `err` is an authentication rejection.
    pub fn handle_api_error(self, err: &ApiError) -> bool {
        if !err.is_auth_rejection() {
            return false;
        }
        let mut cleared = false;
        self.store.update(|s| cleared = s.handle_api_error(err));
        cleared
    }

    /// Raw persisted record, for the debug surface.
    #[cfg(feature = "hydrate")]
    pub(crate) fn raw_record_untracked(self) -> Option<String> {
        use crate::state::session::SESSION_STORAGE_KEY;
        use crate::util::storage::SessionStorage as _;

        self.store
            .with_untracked(|s| s.storage().read(SESSION_STORAGE_KEY))
            .ok()
            .flatten()
    }
}

/// Create the session context, provide it to the tree, and start rehydration.
pub fn provide_session_context() -> SessionContext {
    let session = SessionContext::new(BrowserStorage::default());
    provide_context(session);
    session.init();
    session
}

/// The session context provided by `App`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
