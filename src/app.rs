//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_banner::NoticeBanner;
use crate::pages::{
    admin_uploads::AdminUploadsPage, dashboard::DashboardPage, login::LoginPage, register::RegisterPage,
    rubric_generator::RubricGeneratorPage,
};
use crate::state::notice::NoticeState;
use crate::state::session_context::provide_session_context;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and notice contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session first: every routed screen reads it on mount.
    provide_session_context();
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/learnbridge-client.css"/>
        <Title text="LearnBridge Edu"/>

        <Router>
            <NoticeBanner/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("rubric-generator"))
                    view=RubricGeneratorPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("uploads")) view=AdminUploadsPage/>
            </Routes>
        </Router>
    }
}
