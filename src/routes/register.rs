//! Registration route: live strength meter on every keystroke, blur re-checks
//! on username and email, and a submit pass over all four fields before the
//! native POST may proceed.

use crate::components::Button;
use crate::features::auth::forms::FormValidator;
use crate::features::auth::rules::{FieldKind, ValidationResult};
use crate::features::auth::strength;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password2, set_password2) = signal(String::new());
    let username_result = RwSignal::new(ValidationResult::ok());
    let email_result = RwSignal::new(ValidationResult::ok());
    let password_result = RwSignal::new(ValidationResult::ok());
    let password2_result = RwSignal::new(ValidationResult::ok());

    let strength_report = Memo::new(move |_| strength::evaluate(&password.get()));

    let validator = FormValidator::new()
        .field("username", FieldKind::Username, username.into(), username_result)
        .field("email", FieldKind::Email, email.into(), email_result)
        .field("password", FieldKind::Password, password.into(), password_result)
        .confirm("password2", password2.into(), password.into(), password2_result);

    let username_blur = validator.clone();
    let email_blur = validator.clone();
    let on_submit = move |event: SubmitEvent| {
        if !validator.validate_all() {
            event.prevent_default();
            event.stop_propagation();
        }
    };

    view! {
        <div class="container py-5 auth-card">
            <h1 class="h3 mb-4">"Create account"</h1>
            <form
                id="registration-form"
                action="/auth/register"
                method="post"
                novalidate
                on:submit=on_submit
            >
                <div class="mb-3">
                    <label class="form-label" for="username">"Username"</label>
                    <input
                        id="username"
                        name="username"
                        type="text"
                        class="form-control"
                        class:is-invalid=move || !username_result.get().valid
                        autocomplete="username"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                        on:blur=move |_| {
                            username_blur.validate_field("username");
                        }
                    />
                    <div class="invalid-feedback" id="username-error">
                        {move || username_result.get().message.unwrap_or("")}
                    </div>
                </div>
                <div class="mb-3">
                    <label class="form-label" for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        class="form-control"
                        class:is-invalid=move || !email_result.get().valid
                        autocomplete="email"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                        on:blur=move |_| {
                            email_blur.validate_field("email");
                        }
                    />
                    <div class="invalid-feedback" id="email-error">
                        {move || email_result.get().message.unwrap_or("")}
                    </div>
                </div>
                <div class="mb-3">
                    <label class="form-label" for="password">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        class="form-control"
                        class:is-invalid=move || !password_result.get().valid
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <div class="invalid-feedback" id="password-error">
                        {move || password_result.get().message.unwrap_or("")}
                    </div>
                    <div id="password-strength-meter" class="strength-meter mt-2">
                        <div class=move || strength_report.get().tier.meter_class()></div>
                    </div>
                    <small id="password-strength-text" class="form-text">
                        {move || strength_report.get().meter_text()}
                    </small>
                </div>
                <div class="mb-3">
                    <label class="form-label" for="password2">"Confirm password"</label>
                    <input
                        id="password2"
                        name="password2"
                        type="password"
                        class="form-control"
                        class:is-invalid=move || !password2_result.get().valid
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_password2.set(event_target_value(&event))
                    />
                    <div class="invalid-feedback" id="password2-error">
                        {move || password2_result.get().message.unwrap_or("")}
                    </div>
                </div>
                <Button button_type="submit">"Create account"</Button>
            </form>
            <p class="mt-3 text-center">
                <a href=paths::LOGIN>"Already have an account? Sign in"</a>
            </p>
        </div>
    }
}
