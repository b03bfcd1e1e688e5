//! Admin-only upload of SBC (Standards-Based Curriculum) PDFs to the content
//! service.
//!
//! DESIGN
//! ======
//! The chosen `File` handle stays in the DOM input and is read back through a
//! `NodeRef` at upload time; signals only carry its metadata. Progress is
//! coarse: 0 when idle, 50 while the request is in flight, 100 on success.
//! The route guard already restricts the page to admins, and the role is
//! checked again right before sending.

#[cfg(test)]
#[path = "admin_uploads_test.rs"]
mod admin_uploads_test;

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::net::types::Role;
use crate::state::notice::{Notice, NoticeState};
use crate::state::session_context::use_session;

pub(crate) const PDF_MIME: &str = "application/pdf";
/// 25 MiB.
pub(crate) const MAX_UPLOAD_BYTES: f64 = 25.0 * 1024.0 * 1024.0;

/// Metadata of the file currently picked in the input.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SelectedFile {
    pub name: String,
    pub mime: String,
    /// Bytes, as reported by the browser.
    pub size: f64,
}

pub(crate) fn validate_upload(mime: &str, size: f64) -> Result<(), &'static str> {
    if mime != PDF_MIME {
        return Err("Only PDF files are allowed.");
    }
    if size > MAX_UPLOAD_BYTES {
        return Err("File is too large. Maximum size is 25 MB.");
    }
    Ok(())
}

/// Human-readable size, e.g. `"1.50 MB"`.
pub(crate) fn format_file_size(bytes: f64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    if bytes >= MIB {
        format!("{:.2} MB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Gate applied right before sending.
pub(crate) fn upload_precheck(selected: Option<&SelectedFile>, role: Option<Role>) -> Result<(), Notice> {
    if role != Some(Role::Admin) {
        return Err(Notice::error("Access Denied", "Only administrators can upload SBC documents."));
    }
    let Some(file) = selected else {
        return Err(Notice::error_title("Please select a PDF file to upload."));
    };
    validate_upload(&file.mime, file.size).map_err(|msg| Notice::error("Invalid File", msg))
}

#[cfg(feature = "hydrate")]
fn picked_file(input: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

#[cfg(feature = "hydrate")]
fn reset_input(input: NodeRef<leptos::html::Input>) {
    if let Some(el) = input.get_untracked() {
        el.set_value("");
    }
}

#[component]
pub fn AdminUploadsPage() -> impl IntoView {
    let session = use_session();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = leptos_router::hooks::use_navigate();

    let file_input = NodeRef::<leptos::html::Input>::new();
    let selected = RwSignal::new(None::<SelectedFile>);
    let info = RwSignal::new(String::new());
    let progress = RwSignal::new(0_u8);
    let busy = RwSignal::new(false);

    let on_change = move |_ev: leptos::ev::Event| {
        progress.set(0);
        info.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = picked_file(file_input) else {
                selected.set(None);
                return;
            };
            let candidate = SelectedFile { name: file.name(), mime: file.type_(), size: file.size() };
            match validate_upload(&candidate.mime, candidate.size) {
                Ok(()) => selected.set(Some(candidate)),
                Err(msg) => {
                    info.set(msg.to_owned());
                    selected.set(None);
                    reset_input(file_input);
                }
            }
        }
    };

    let on_upload = move |_| {
        if busy.get() {
            return;
        }
        let current = selected.get();
        if let Err(notice) = upload_precheck(current.as_ref(), session.state_untracked().role()) {
            notices.update(|n| n.push(notice));
            return;
        }
        busy.set(true);
        progress.set(50);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match picked_file(file_input) {
                    Some(file) => {
                        let token = session.token_untracked();
                        crate::net::api::upload_sbc(token.as_deref(), &file).await
                    }
                    None => Err(crate::net::error::ApiError::Decode("selected file is no longer available".to_owned())),
                };
                match result {
                    Ok(uploaded) => {
                        log::info!("admin uploads: stored at {}", uploaded.file_path);
                        progress.set(100);
                        notices.update(|n| {
                            n.push(Notice::success("Upload Successful", format!("Saved to {}", uploaded.file_path)));
                        });
                        selected.set(None);
                        reset_input(file_input);
                    }
                    Err(e) => {
                        progress.set(0);
                        notices.update(|n| {
                            n.push(Notice::from_api_error(
                                &e,
                                "Upload",
                                "Could not connect to the content service. Please check your connection.",
                            ));
                        });
                        if session.handle_api_error(&e) {
                            navigate(crate::util::route_guard::LOGIN_PATH, leptos_router::NavigateOptions::default());
                        }
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, file_input);
    };

    view! {
        <DashboardShell role=Some(Role::Admin)>
            <section class="tool-page">
                <h1 class="tool-page__title">"Upload SBC Documents"</h1>
                <p class="tool-page__subtitle">"PDF only, up to 25 MB."</p>
                <div class="upload-card">
                    <input
                        class="upload-card__input"
                        type="file"
                        accept=PDF_MIME
                        node_ref=file_input
                        on:change=on_change
                        disabled=move || busy.get()
                    />
                    {move || {
                        selected
                            .get()
                            .map(|file| {
                                view! {
                                    <p class="upload-card__file">
                                        <span class="upload-card__file-name">{file.name}</span>
                                        " "
                                        <span class="upload-card__file-size">{format_file_size(file.size)}</span>
                                    </p>
                                }
                            })
                    }}
                    <Show when=move || !info.get().is_empty()>
                        <p class="tool-form__message">{move || info.get()}</p>
                    </Show>
                    <Show when=move || { progress.get() > 0 }>
                        <div class="upload-card__progress">
                            <div
                                class="upload-card__progress-bar"
                                style=move || format!("width: {}%", progress.get())
                            ></div>
                        </div>
                    </Show>
                    <button
                        class="tool-form__submit"
                        on:click=on_upload.clone()
                        disabled=move || busy.get() || selected.with(Option::is_none)
                    >
                        {move || if busy.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </div>
            </section>
        </DashboardShell>
    }
}
