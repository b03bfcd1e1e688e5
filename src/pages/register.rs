//! Registration page for new teachers and students.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::form_field::{FormField, SelectField};
use crate::net::types::RegisterRequest;
use crate::pages::login::looks_like_email;
use crate::state::notice::NoticeState;

pub(crate) const POSITIONS: &[&str] = &["Teacher", "Student", "Other"];
pub(crate) const GENDERS: &[&str] = &["Male", "Female", "Other", "Prefer not to say"];

/// Delay before sending a newly registered user to the login page.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_millis(1500);

/// Raw form contents as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterForm {
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub school: String,
    pub location: String,
    pub position: String,
    pub gender: String,
    pub password: String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Validate the form and build the request, reporting the first problem.
pub(crate) fn validate_register_form(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let first_name = form.first_name.trim();
    if first_name.chars().count() < 2 {
        return Err("First name must be at least 2 characters.");
    }
    let surname = form.surname.trim();
    if surname.chars().count() < 2 {
        return Err("Surname must be at least 2 characters.");
    }
    let email = form.email.trim();
    if !looks_like_email(email) {
        return Err("Invalid email address.");
    }
    if !POSITIONS.contains(&form.position.as_str()) {
        return Err("Position is required.");
    }
    if !GENDERS.contains(&form.gender.as_str()) {
        return Err("Gender is required.");
    }
    if form.password.chars().count() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(RegisterRequest {
        first_name: first_name.to_owned(),
        surname: surname.to_owned(),
        email: email.to_owned(),
        phone: optional(&form.phone),
        school: optional(&form.school),
        location: optional(&form.location),
        position: form.position.clone(),
        gender: form.gender.clone(),
        password: form.password.clone(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = leptos_router::hooks::use_navigate();

    let first_name = RwSignal::new(String::new());
    let surname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let school = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let position = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterForm {
            first_name: first_name.get(),
            surname: surname.get(),
            email: email.get(),
            phone: phone.get(),
            school: school.get(),
            location: location.get(),
            position: position.get(),
            gender: gender.get(),
            password: password.get(),
        };
        let request = match validate_register_form(&form) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::state::notice::Notice;

                match crate::net::api::register(&request).await {
                    Ok(()) => {
                        log::info!("register: account created for {}", request.email);
                        notices.update(|n| {
                            n.push(Notice::success("Registration Successful!", "Please log in with your new account."));
                        });
                        gloo_timers::future::sleep(REDIRECT_DELAY).await;
                        navigate(crate::util::route_guard::LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        notices.update(|n| {
                            n.push(Notice::from_api_error(
                                &e,
                                "Registration",
                                "Could not connect to the server. Please check your connection.",
                            ));
                        });
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, notices, &navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create an account"</h1>
                <p class="auth-card__subtitle">"Fill in your details to get started"</p>
                <form class="auth-form" on:submit=on_submit>
                    <FormField label="First Name *" placeholder="e.g., Kwame" value=first_name busy=busy/>
                    <FormField label="Surname *" placeholder="e.g., Nkrumah" value=surname busy=busy/>
                    <FormField
                        label="Email *"
                        input_type="email"
                        placeholder="your.email@example.com"
                        value=email
                        busy=busy
                    />
                    <FormField
                        label="Phone Number"
                        input_type="tel"
                        placeholder="+233 XXX XXX XXX"
                        value=phone
                        busy=busy
                    />
                    <FormField
                        label="Password *"
                        input_type="password"
                        placeholder="********"
                        value=password
                        busy=busy
                    />
                    <FormField label="School" placeholder="e.g., Accra High School" value=school busy=busy/>
                    <FormField label="Location" placeholder="e.g., Accra, Greater Accra" value=location busy=busy/>
                    <SelectField
                        label="Position *"
                        placeholder="Select your position"
                        options=POSITIONS
                        value=position
                        busy=busy
                    />
                    <SelectField
                        label="Gender *"
                        placeholder="Select your gender"
                        options=GENDERS
                        value=gender
                        busy=busy
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
