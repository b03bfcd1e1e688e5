//! Login page: email + password sign-in against the auth service.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::state::notice::NoticeState;
use crate::state::session_context::use_session;
use crate::util::route_guard::DEFAULT_LANDING_PATH;

/// Loose address check: one `@`, non-empty local part, dotted domain, no
/// whitespace.
pub(crate) fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if !looks_like_email(email) {
        return Err("Invalid email address.");
    }
    if password.is_empty() {
        return Err("Password is required.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Signed-in visitors (rehydrated or just logged in) go to the dashboard.
    Effect::new(move || {
        let state = session.state();
        if !state.is_loading() && state.is_authenticated() {
            navigate(DEFAULT_LANDING_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::notice::Notice;

            match crate::net::api::login(&email_value, &password_value).await {
                Ok(auth) => {
                    if let Err(e) = session.set_user_and_token(auth.user, auth.token) {
                        notices.update(|n| n.push(Notice::error("Login Failed", e.to_string())));
                    }
                }
                Err(e) => {
                    notices.update(|n| {
                        n.push(Notice::from_api_error(&e, "Login", "Could not connect to the server."));
                    });
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, notices);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue to LearnBridge"</p>
                <form class="auth-form" on:submit=on_submit>
                    <FormField
                        label="Email"
                        input_type="email"
                        placeholder="your.email@example.com"
                        value=email
                        busy=busy
                    />
                    <FormField label="Password" input_type="password" placeholder="********" value=password busy=busy/>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
