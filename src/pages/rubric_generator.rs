//! Rubric generator: assessment details in, markdown grading rubric out.
//!
//! ERROR HANDLING
//! ==============
//! Validation problems stay inline under the form. Remote failures become
//! notices; an auth rejection additionally clears the session and sends the
//! visitor to `/login`.

#[cfg(test)]
#[path = "rubric_generator_test.rs"]
mod rubric_generator_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::components::dashboard_shell::DashboardShell;
use crate::components::form_field::{FormField, TextAreaField};
use crate::net::types::RubricRequest;
use crate::state::notice::NoticeState;
use crate::state::session_context::use_session;

pub(crate) const DEFAULT_ASSESSMENT_TYPE: &str = "Essay";
pub(crate) const DEFAULT_MAX_SCORE: &str = "100";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RubricForm {
    pub assessment_title: String,
    pub assessment_type: String,
    pub class_level: String,
    pub task_description: String,
    /// Free text; blank means "let the service decide".
    pub max_score: String,
}

impl Default for RubricForm {
    fn default() -> Self {
        Self {
            assessment_title: String::new(),
            assessment_type: DEFAULT_ASSESSMENT_TYPE.to_owned(),
            class_level: String::new(),
            task_description: String::new(),
            max_score: DEFAULT_MAX_SCORE.to_owned(),
        }
    }
}

fn at_least(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub(crate) fn validate_rubric_form(form: &RubricForm) -> Result<RubricRequest, &'static str> {
    let assessment_title = form.assessment_title.trim();
    if !at_least(assessment_title, 5) {
        return Err("Title must be at least 5 characters.");
    }
    let assessment_type = form.assessment_type.trim();
    if !at_least(assessment_type, 3) {
        return Err("Assessment type is required.");
    }
    let class_level = form.class_level.trim();
    if !at_least(class_level, 1) {
        return Err("Class level is required.");
    }
    let task_description = form.task_description.trim();
    if !at_least(task_description, 20) {
        return Err("Task description must be at least 20 characters.");
    }
    let max_score = match form.max_score.trim() {
        "" => None,
        raw => match raw.parse::<f64>() {
            Ok(score) if score.is_finite() && score > 0.0 => Some(score),
            _ => return Err("Max score must be a positive number."),
        },
    };
    Ok(RubricRequest {
        assessment_title: assessment_title.to_owned(),
        assessment_type: assessment_type.to_owned(),
        class_level: class_level.to_owned(),
        task_description: task_description.to_owned(),
        max_score,
    })
}

/// Render model-produced markdown to HTML with raw HTML dropped.
pub(crate) fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn RubricGeneratorPage() -> impl IntoView {
    let session = use_session();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = leptos_router::hooks::use_navigate();

    let defaults = RubricForm::default();
    let assessment_title = RwSignal::new(defaults.assessment_title);
    let assessment_type = RwSignal::new(defaults.assessment_type);
    let class_level = RwSignal::new(defaults.class_level);
    let task_description = RwSignal::new(defaults.task_description);
    let max_score = RwSignal::new(defaults.max_score);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let rubric = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RubricForm {
            assessment_title: assessment_title.get(),
            assessment_type: assessment_type.get(),
            class_level: class_level.get(),
            task_description: task_description.get(),
            max_score: max_score.get(),
        };
        let request = match validate_rubric_form(&form) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());
        rubric.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::state::notice::Notice;

                let token = session.token_untracked();
                match crate::net::api::generate_rubric(token.as_deref(), &request).await {
                    Ok(markdown) => {
                        log::info!("rubric generator: received {} bytes", markdown.len());
                        rubric.set(Some(markdown));
                        notices.update(|n| n.push(Notice::success("Rubric Generated", "Your rubric is ready.")));
                    }
                    Err(e) => {
                        notices.update(|n| {
                            n.push(Notice::from_api_error(
                                &e,
                                "Generation",
                                "Could not connect to the AI service. Please check your connection.",
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
        let _ = (request, session, notices, &navigate);
    };

    view! {
        <DashboardShell>
            <section class="tool-page">
                <h1 class="tool-page__title">"Rubric Generator"</h1>
                <p class="tool-page__subtitle">"Create a grading rubric for your assessment."</p>
                <form class="tool-form" on:submit=on_submit.clone()>
                    <FormField
                        label="Assessment Title *"
                        placeholder="e.g., Persuasive Essay on Climate Change"
                        value=assessment_title
                        busy=busy
                    />
                    <FormField label="Assessment Type *" placeholder="e.g., Essay" value=assessment_type busy=busy/>
                    <FormField label="Class Level *" placeholder="e.g., JHS 2" value=class_level busy=busy/>
                    <TextAreaField
                        label="Task Description *"
                        placeholder="Describe what students are expected to do"
                        value=task_description
                        busy=busy
                    />
                    <FormField label="Max Score" input_type="number" value=max_score busy=busy/>
                    <button class="tool-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Generating..." } else { "Generate Rubric" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="tool-form__message">{move || info.get()}</p>
                </Show>
                {move || {
                    rubric
                        .get()
                        .map(|markdown| {
                            let rendered = render_markdown_html(&markdown);
                            view! {
                                <article class="tool-result">
                                    <h2 class="tool-result__title">"Generated Rubric"</h2>
                                    <div class="tool-result__markdown" inner_html=rendered></div>
                                </article>
                            }
                        })
                }}
            </section>
        </DashboardShell>
    }
}
