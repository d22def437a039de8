//! Canonical OTP token field: digit normalization, completion detection, and
//! delayed auto-submission of the owning form. The delayed shot is replaced
//! on every edit and re-reads the live value at fire time, so it can never
//! submit a stale snapshot or fire twice.

use crate::app_lib::config::AppConfig;
use crate::app_lib::schedule::OneShot;
use crate::features::auth::otp::{OtpAction, OtpState, OTP_LENGTH};
use crate::features::auth::rules::{self, FieldKind, ValidationResult};
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn OtpField(
    /// Form the field belongs to, submitted natively once a complete code
    /// has rested for the confirmation delay.
    form: NodeRef<html::Form>,
    /// Normalized digits, shared with the route's form validator.
    value: RwSignal<String>,
    /// Result signal shared with the route's form validator.
    result: RwSignal<ValidationResult>,
    /// Field id and name expected by the backend handler.
    #[prop(default = "token")] id: &'static str,
) -> impl IntoView {
    let state = StoredValue::new_local(OtpState::new());
    let pending_submit = StoredValue::new_local(OneShot::idle());
    let input_ref = NodeRef::<html::Input>::new();
    let delay_ms = AppConfig::load().auto_submit_delay_ms;

    // Focus the field as soon as it mounts.
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    on_cleanup(move || pending_submit.update_value(OneShot::cancel));

    let on_input = move |event: web_sys::Event| {
        let raw = event_target_value(&event);
        let action = state
            .try_update_value(|otp| otp.apply_input(&raw))
            .unwrap_or(OtpAction::None);
        value.set(state.with_value(|otp| otp.digits().to_string()));

        match action {
            OtpAction::ScheduleSubmit => {
                pending_submit.update_value(|timer| {
                    timer.schedule(delay_ms, move || {
                        // Read the live value at fire time; a later edit has
                        // already replaced this shot, but never trust a
                        // snapshot either.
                        let current = value.get_untracked();
                        if !rules::validate(FieldKind::OtpToken, &current, None).valid {
                            return;
                        }
                        state.update_value(OtpState::mark_submitting);
                        match form.get_untracked() {
                            Some(form) => {
                                if let Err(err) = form.submit() {
                                    leptos::logging::error!(
                                        "otp field {id}: native submit failed: {err:?}"
                                    );
                                }
                            }
                            None => leptos::logging::error!(
                                "otp field {id}: owning form is not mounted"
                            ),
                        }
                    });
                });
            }
            OtpAction::CancelPending => pending_submit.update_value(OneShot::cancel),
            OtpAction::None => {}
        }
    };

    view! {
        <input
            node_ref=input_ref
            id=id
            name=id
            type="text"
            class="form-control token-input"
            class:is-invalid=move || !result.get().valid
            inputmode="numeric"
            autocomplete="one-time-code"
            maxlength=OTP_LENGTH.to_string()
            prop:value=move || value.get()
            on:input=on_input
        />
        <div class="invalid-feedback" id=format!("{id}-error")>
            {move || result.get().message.unwrap_or("")}
        </div>
    }
}
