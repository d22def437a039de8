//! Alert banners for inline feedback. Messages must be safe to render and
//! must never include credential material or the enrollment secret.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => "alert alert-danger",
        AlertKind::Success => "alert alert-success",
        AlertKind::Info => "alert alert-info",
    };

    view! { <div class=class role="alert">{message}</div> }
}
