//! Route tree for the authentication surface.

mod login;
mod not_found;
mod register;
mod two_factor;

pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;
pub(crate) use two_factor::{TwoFactorSetupPage, TwoFactorVerifyPage};

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths shared with navigation links.
pub(crate) mod paths {
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/two-factor") view=TwoFactorVerifyPage />
            <Route path=path!("/two-factor/setup") view=TwoFactorSetupPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
