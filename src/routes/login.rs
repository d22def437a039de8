//! Login route. The submit pass gates the browser-default POST; this
//! component issues no network calls of its own. The blur pass re-checks the
//! email field as the user moves through the form.

use crate::components::Button;
use crate::features::auth::forms::FormValidator;
use crate::features::auth::rules::{FieldKind, ValidationResult, MSG_PASSWORD_REQUIRED};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let email_result = RwSignal::new(ValidationResult::ok());
    let password_result = RwSignal::new(ValidationResult::ok());

    let validator = FormValidator::new()
        .field("email", FieldKind::Email, email.into(), email_result)
        .required(
            "password",
            MSG_PASSWORD_REQUIRED,
            password.into(),
            password_result,
        );

    let blur_validator = validator.clone();
    let on_submit = move |event: SubmitEvent| {
        if !validator.validate_all() {
            event.prevent_default();
            event.stop_propagation();
        }
    };

    view! {
        <div class="container py-5 auth-card">
            <h1 class="h3 mb-4">"Sign in"</h1>
            <form
                id="login-form"
                action="/auth/login"
                method="post"
                novalidate
                on:submit=on_submit
            >
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
                            blur_validator.validate_field("email");
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
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <div class="invalid-feedback" id="password-error">
                        {move || password_result.get().message.unwrap_or("")}
                    </div>
                </div>
                <Button button_type="submit">"Sign in"</Button>
            </form>
            <p class="mt-3 text-center">
                <a href=paths::REGISTER>"Create an account"</a>
            </p>
        </div>
    }
}
