//! Dashboard sidebar: role-filtered navigation, user summary, logout.
//!
//! DESIGN
//! ======
//! The same [`NAV_ITEMS`] table drives both the sidebar links and the
//! dashboard tool cards, so a role sees the same tools in both places.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::state::session_context::use_session;

/// One navigation destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Roles that see this link.
    pub roles: &'static [Role],
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "/dashboard",
        label: "Dashboard",
        description: "Your tools at a glance",
        roles: &[Role::Teacher, Role::Student, Role::Admin],
    },
    NavItem {
        href: "/dashboard/rubric-generator",
        label: "Rubric Generator",
        description: "Create grading rubrics for your assessments",
        roles: &[Role::Teacher, Role::Admin],
    },
    NavItem {
        href: "/admin/uploads",
        label: "Admin Uploads",
        description: "Upload SBC curriculum documents",
        roles: &[Role::Admin],
    },
];

/// Navigation items visible to `role`. Users without a recognised role see
/// nothing.
pub fn nav_items_for(role: Option<Role>) -> Vec<&'static NavItem> {
    let Some(role) = role else {
        return Vec::new();
    };
    NAV_ITEMS.iter().filter(|item| item.roles.contains(&role)).collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let location = use_location();

    let on_logout = move |_| {
        session.clear_auth();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <a class="sidebar__brand" href="/dashboard">
                "LearnBridge"
                <span class="sidebar__brand-accent">"Edu"</span>
            </a>
            <nav class="sidebar__nav">
                <ul>
                    {move || {
                        let current = location.pathname.get();
                        nav_items_for(session.state().role())
                            .into_iter()
                            .map(|item| {
                                let active = current == item.href;
                                view! {
                                    <li>
                                        <a class="sidebar__link" class:sidebar__link--active=active href=item.href>
                                            {item.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </nav>
            <div class="sidebar__user">
                {move || {
                    session
                        .state()
                        .user()
                        .map(|user| {
                            view! {
                                <p class="sidebar__user-name">{user.display_name()}</p>
                                <p class="sidebar__user-role">
                                    {user.role().map_or_else(|| user.role.clone(), |role| role.as_str().to_owned())}
                                </p>
                            }
                        })
                }}
                <button class="sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
