//! Rotation countdown display: remaining seconds, a progress bar, and a
//! one-tick highlight at the start of each window. The interval is owned by
//! the component and stopped on cleanup.

use crate::app_lib::config::AppConfig;
use crate::app_lib::schedule::Ticker;
use crate::features::auth::countdown;
use leptos::prelude::*;

const TICK_MS: u32 = 1_000;

fn second_of_minute() -> u32 {
    js_sys::Date::new_0().get_seconds()
}

#[component]
pub fn TokenCountdown() -> impl IntoView {
    let period_seconds = AppConfig::load().totp_period_seconds;

    // First tick runs immediately; the interval takes over afterwards.
    let (state, set_state) = signal(countdown::tick(second_of_minute(), period_seconds));
    let ticker = StoredValue::new_local(Ticker::start(TICK_MS, move || {
        set_state.set(countdown::tick(second_of_minute(), period_seconds));
    }));

    on_cleanup(move || ticker.update_value(Ticker::stop));

    view! {
        <div class="token-countdown text-center my-3">
            <p class="text-muted mb-1">
                "New code in "
                <span
                    id="token-timer"
                    class="token-timer fw-bold"
                    class:highlight=move || state.get().highlight_active
                >
                    {move || state.get().remaining}
                </span>
                " seconds"
            </p>
            <div class="progress">
                <div
                    id="token-progress"
                    class="progress-bar"
                    role="progressbar"
                    style:width=move || format!("{}%", state.get().progress_percent())
                ></div>
            </div>
        </div>
    }
}
