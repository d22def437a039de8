//! Copy-to-clipboard button with a transient acknowledgment label. The label
//! derives from a signal rather than the DOM, so rapid repeated copies always
//! revert to the true original label, never to a leftover "Copied!".

use crate::app_lib::config::AppConfig;
use crate::app_lib::schedule::OneShot;
use crate::app_lib::AppError;
use crate::features::auth::clipboard;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CopyButton(
    /// Text placed on the clipboard when clicked.
    #[prop(into)] text: Signal<String>,
    #[prop(default = "Copy")] label: &'static str,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let revert = StoredValue::new_local(OneShot::idle());
    let ack_ms = AppConfig::load().copy_ack_ms;

    on_cleanup(move || revert.update_value(OneShot::cancel));

    let on_click = move |_| {
        let value = text.get_untracked().trim().to_string();
        spawn_local(async move {
            match clipboard::copy_text(&value).await {
                Ok(()) => {
                    set_copied.set(true);
                    // Each copy restarts its own acknowledgment window.
                    revert.update_value(|timer| {
                        timer.schedule(ack_ms, move || set_copied.set(false));
                    });
                }
                Err(err) => notify_failure(&err),
            }
        });
    };

    view! {
        <button
            type="button"
            id="copy-secret"
            class="btn btn-sm"
            class:btn-success=move || copied.get()
            class:btn-outline-secondary=move || !copied.get()
            on:click=on_click
        >
            {move || if copied.get() { "Copied!" } else { label }}
        </button>
    }
}

/// Clipboard failures surface as a blocking notification plus a logged
/// diagnostic; they are never swallowed.
fn notify_failure(err: &AppError) {
    leptos::logging::error!("Failed to copy text: {err}");
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("Failed to copy to clipboard");
    }
}
