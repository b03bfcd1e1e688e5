//! Dashboard landing page: greeting plus cards for the tools the signed-in
//! role can use.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::components::sidebar::{NavItem, nav_items_for};
use crate::net::types::Role;
use crate::state::session_context::use_session;
use crate::util::route_guard::DEFAULT_LANDING_PATH;

/// Tool cards shown on the dashboard: every visible nav item except the
/// dashboard itself.
pub(crate) fn tool_cards_for(role: Option<Role>) -> Vec<&'static NavItem> {
    nav_items_for(role).into_iter().filter(|item| item.href != DEFAULT_LANDING_PATH).collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    let greeting = move || {
        session
            .state()
            .user()
            .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome back, {}", user.first_name))
    };

    view! {
        <DashboardShell>
            <section class="dashboard">
                <h1 class="dashboard__title">{greeting}</h1>
                <p class="dashboard__subtitle">"Pick a tool to get started."</p>
                <div class="dashboard__cards">
                    {move || {
                        let cards = tool_cards_for(session.state().role());
                        if cards.is_empty() {
                            return view! {
                                <p class="dashboard__empty">"No tools are available for your account yet."</p>
                            }
                                .into_any();
                        }
                        cards
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a class="dashboard-card" href=item.href>
                                        <h2 class="dashboard-card__title">{item.label}</h2>
                                        <p class="dashboard-card__description">{item.description}</p>
                                    </a>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </section>
        </DashboardShell>
    }
}
