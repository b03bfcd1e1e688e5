//! Guarded layout shared by the dashboard screens.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::net::types::Role;
use crate::util::route_guard::Protected;

/// Sidebar plus main column, rendered only once the route guard allows it.
#[component]
pub fn DashboardShell(#[prop(default = None)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Protected role=role>
            <div class="dashboard-shell">
                <Sidebar/>
                <main class="dashboard-shell__main">{children()}</main>
            </div>
        </Protected>
    }
}
