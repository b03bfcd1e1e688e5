//! Banner showing the latest transient notice. Each notice dismisses itself
//! after [`NOTICE_LIFETIME`] unless a newer one replaced it first.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::notice::NoticeState;

pub const NOTICE_LIFETIME: Duration = Duration::from_secs(5);

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move || {
        let (seq, showing) = notices.with(|n| (n.seq, n.current.is_some()));
        if !showing {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(NOTICE_LIFETIME).await;
            notices.update(|n| {
                n.dismiss_if_current(seq);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    });

    view! {
        {move || {
            notices
                .get()
                .current
                .map(|notice| {
                    view! {
                        <div class=format!("notice {}", notice.kind.css_modifier()) role="status">
                            <strong class="notice__title">{notice.title}</strong>
                            {notice.description.map(|d| view! { <p class="notice__description">{d}</p> })}
                            <button
                                class="notice__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(NoticeState::dismiss)
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
