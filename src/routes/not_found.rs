use crate::routes::paths;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container py-5 text-center">
            <h1 class="h3 mb-3">"Page not found"</h1>
            <a href=paths::LOGIN>"Back to sign in"</a>
        </div>
    }
}
