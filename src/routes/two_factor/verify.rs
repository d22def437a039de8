//! Token verification route: rotation countdown beside the digit field, which
//! auto-submits a complete code after its confirmation delay. A manual submit
//! still runs the full validation pass.

use crate::components::{Button, OtpField, TokenCountdown};
use crate::features::auth::forms::FormValidator;
use crate::features::auth::rules::{FieldKind, ValidationResult};
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn TwoFactorVerifyPage() -> impl IntoView {
    let token = RwSignal::new(String::new());
    let token_result = RwSignal::new(ValidationResult::ok());
    let form_ref = NodeRef::<html::Form>::new();

    let validator =
        FormValidator::new().field("token", FieldKind::OtpToken, token.into(), token_result);
    let on_submit = move |event: SubmitEvent| {
        if !validator.validate_all() {
            event.prevent_default();
            event.stop_propagation();
        }
    };

    view! {
        <div class="container py-5 text-center auth-card">
            <h1 class="h3 mb-3">"Two-factor verification"</h1>
            <p class="text-muted">"Enter the 6-digit code from your authenticator app."</p>
            <TokenCountdown />
            <form
                id="two-factor-form"
                action="/auth/two-factor"
                method="post"
                novalidate
                node_ref=form_ref
                on:submit=on_submit
            >
                <div class="mb-3">
                    <label class="form-label" for="token">"Authentication code"</label>
                    <OtpField form=form_ref value=token result=token_result />
                </div>
                <Button button_type="submit">"Verify"</Button>
            </form>
        </div>
    }
}
