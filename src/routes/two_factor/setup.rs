//! Authenticator enrollment route: QR toggle, secret copy, first-token
//! verification through the same canonical OTP controller, and a guarded
//! disable form. Enrollment data comes from the host page (`window.AULA_PAGE`)
//! and is validated when the route initializes; a missing contract renders an
//! error instead of silently doing nothing.

use crate::app_lib::config::PageData;
use crate::components::{Alert, AlertKind, Button, CopyButton, OtpField, TokenCountdown};
use crate::features::auth::forms::FormValidator;
use crate::features::auth::rules::{FieldKind, ValidationResult};
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

const DISABLE_PROMPT: &str = "Are you sure you want to disable two-factor authentication? \
    This will make your account less secure.";

#[component]
pub fn TwoFactorSetupPage() -> impl IntoView {
    let page = PageData::load();

    let token = RwSignal::new(String::new());
    let token_result = RwSignal::new(ValidationResult::ok());
    let form_ref = NodeRef::<html::Form>::new();
    let (show_qr, set_show_qr) = signal(false);

    let validator =
        FormValidator::new().field("token", FieldKind::OtpToken, token.into(), token_result);
    let on_submit = move |event: SubmitEvent| {
        if !validator.validate_all() {
            event.prevent_default();
            event.stop_propagation();
        }
    };

    let on_disable_submit = move |event: SubmitEvent| {
        let confirmed = web_sys::window().is_some_and(|window| {
            window.confirm_with_message(DISABLE_PROMPT).unwrap_or(false)
        });
        if !confirmed {
            event.prevent_default();
        }
    };

    let two_factor_enabled = page.two_factor_enabled;
    let enrollment = match (page.totp_secret, page.qr_code_url) {
        (Some(secret), Some(qr_code_url)) => view! {
            <div>
                <div class="text-center">
                    <button
                        type="button"
                        id="show-qr-code"
                        class="btn btn-link"
                        on:click=move |_| set_show_qr.update(|visible| *visible = !*visible)
                    >
                        {move || if show_qr.get() { "Hide QR Code" } else { "Show QR Code" }}
                    </button>
                    <div
                        id="qr-code-container"
                        class="qr-code-container"
                        class:show=move || show_qr.get()
                    >
                        <img src=qr_code_url alt="Authenticator QR code" />
                    </div>
                    <p class="text-muted mt-2">
                        "Scan the QR code with your authenticator app, or enter the secret \
                         key manually."
                    </p>
                    <div class="d-flex align-items-center justify-content-center gap-2 my-3">
                        <code id="secret-key">{secret.clone()}</code>
                        <CopyButton text=secret />
                    </div>
                </div>
                <TokenCountdown />
                <form
                    id="two-factor-setup-form"
                    action="/auth/two-factor/setup"
                    method="post"
                    novalidate
                    node_ref=form_ref
                    on:submit=on_submit
                >
                    <div class="mb-3">
                        <label class="form-label" for="token">
                            "Enter the first code to confirm"
                        </label>
                        <OtpField form=form_ref value=token result=token_result />
                    </div>
                    <Button button_type="submit">"Verify and enable"</Button>
                </form>
            </div>
        }
        .into_any(),
        _ => view! {
            <Alert
                kind=AlertKind::Error
                message="Enrollment data is missing from the page configuration. Reload the \
                         page or contact support."
                    .to_string()
            />
        }
        .into_any(),
    };

    view! {
        <div class="container py-5 auth-card">
            <h1 class="h3 mb-3 text-center">"Set up two-factor authentication"</h1>
            {enrollment}
            {two_factor_enabled.then(move || view! {
                <form
                    id="disable-2fa-form"
                    action="/auth/two-factor/disable"
                    method="post"
                    on:submit=on_disable_submit
                >
                    <button type="submit" class="btn btn-outline-danger w-100 mt-4">
                        "Disable two-factor authentication"
                    </button>
                </form>
            })}
        </div>
    }
}
