//! Cancellable scheduled tasks over `gloo_timers`. The legacy surface fired
//! its timers and forgot them; these wrappers give each timer an owner with an
//! explicit cancel, and dropping a handle tears the underlying timer down, so
//! components can release every timer in `on_cleanup`.

use gloo_timers::callback::{Interval, Timeout};

/// One-shot scheduled task. Scheduling replaces any pending shot, which is
/// what lets the OTP field reschedule on every edit instead of firing a stale
/// submission.
#[derive(Default)]
pub struct OneShot {
    handle: Option<Timeout>,
}

impl OneShot {
    pub const fn idle() -> Self {
        Self { handle: None }
    }

    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.cancel();
        self.handle = Some(Timeout::new(delay_ms, callback));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

/// Repeating scheduled task with an explicit stop.
pub struct Ticker {
    handle: Option<Interval>,
}

impl Ticker {
    pub fn start(period_ms: u32, callback: impl FnMut() + 'static) -> Self {
        Self {
            handle: Some(Interval::new(period_ms, callback)),
        }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}
