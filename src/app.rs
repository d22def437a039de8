use crate::app_lib::build_info;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <AppRoutes />
        </Router>
        <footer class="text-center text-muted py-3">
            <small>{format!("aula-web {}", build_info::git_commit_hash())}</small>
        </footer>
    }
}
