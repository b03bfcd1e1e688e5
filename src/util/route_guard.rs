//! Route guarding for protected screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same protocol: wait until the component
//! has mounted on the client and the session has finished loading, then send
//! unauthenticated visitors to `/login` and visitors with the wrong role to
//! `/dashboard`. Until the guard allows it, protected content is not rendered
//! at all, so server-rendered HTML and the first client render agree.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::notice::{Notice, NoticeState};
use crate::state::session::SessionState;
use crate::state::session_context::{SessionContext, use_session};

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    LoginRequired,
    Forbidden,
}

impl RedirectReason {
    pub fn notice(self) -> Notice {
        match self {
            Self::LoginRequired => Notice::error("Access Denied", "Please log in."),
            Self::Forbidden => Notice::error("Access Denied", "You do not have permission to view this page."),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Not mounted yet or session still loading; render nothing protected.
    Pending,
    Allow,
    Redirect { to: &'static str, reason: RedirectReason },
}

/// Decide what a protected screen should do for the current session.
pub fn evaluate(state: &SessionState, mounted: bool, required_role: Option<Role>) -> GuardDecision {
    if !mounted || state.is_loading() {
        return GuardDecision::Pending;
    }
    if !state.is_authenticated() {
        return GuardDecision::Redirect { to: LOGIN_PATH, reason: RedirectReason::LoginRequired };
    }
    match required_role {
        Some(role) if state.role() != Some(role) => {
            GuardDecision::Redirect { to: DEFAULT_LANDING_PATH, reason: RedirectReason::Forbidden }
        }
        _ => GuardDecision::Allow,
    }
}

/// Notice to show for a redirect. A session that was signed in earlier in
/// this mount and then cleared (logout, rejected token) leaves quietly, so
/// the notice that caused the clear stays visible.
pub fn redirect_notice(reason: RedirectReason, signed_in_this_mount: bool) -> Option<Notice> {
    match reason {
        RedirectReason::LoginRequired if signed_in_this_mount => None,
        _ => Some(reason.notice()),
    }
}

/// Navigate away whenever the guard decides to redirect. Each mount redirects
/// at most once.
pub fn install_route_guard<F>(
    session: SessionContext,
    required_role: Option<Role>,
    mounted: RwSignal<bool>,
    notices: Option<RwSignal<NoticeState>>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let redirected = RwSignal::new(false);
    let signed_in = RwSignal::new(false);
    Effect::new(move || {
        let state = session.state();
        if state.is_authenticated() && !signed_in.get_untracked() {
            signed_in.set(true);
        }
        let decision = evaluate(&state, mounted.get(), required_role);
        if let GuardDecision::Redirect { to, reason } = decision {
            if redirected.get_untracked() {
                return;
            }
            redirected.set(true);
            log::info!("route guard: redirecting to {to} ({reason:?})");
            if let (Some(notices), Some(notice)) = (notices, redirect_notice(reason, signed_in.get_untracked())) {
                notices.update(|n| n.push(notice));
            }
            navigate(to, NavigateOptions::default());
        }
    });
}

/// Render `children` only once the guard allows it; a neutral loading view
/// otherwise.
#[component]
pub fn Protected(#[prop(default = None)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let notices = use_context::<RwSignal<NoticeState>>();
    let mounted = RwSignal::new(false);
    // Effects only run in the browser, after hydration.
    Effect::new(move || mounted.set(true));

    install_route_guard(session, role, mounted, notices, use_navigate());

    let allowed = move || evaluate(&session.state(), mounted.get(), role) == GuardDecision::Allow;

    view! {
        <Show
            when=allowed
            fallback=|| view! { <div class="guard-loading" aria-busy="true">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
