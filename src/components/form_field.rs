//! Labelled form inputs bound to string signals.

use leptos::prelude::*;

/// Text-like `<input>` with a label, disabled while `busy`.
#[component]
pub fn FormField(
    label: &'static str,
    value: RwSignal<String>,
    busy: RwSignal<bool>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || busy.get()
            />
        </label>
    }
}

/// Multi-line variant of [`FormField`].
#[component]
pub fn TextAreaField(
    label: &'static str,
    value: RwSignal<String>,
    busy: RwSignal<bool>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <textarea
                class="form-input form-input--multiline"
                rows="5"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || busy.get()
            ></textarea>
        </label>
    }
}

/// `<select>` over a fixed option list, with an empty placeholder option.
#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    busy: RwSignal<bool>,
    options: &'static [&'static str],
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
                disabled=move || busy.get()
            >
                <option value="">{placeholder}</option>
                {options
                    .iter()
                    .map(|opt| view! { <option value=*opt>{*opt}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
