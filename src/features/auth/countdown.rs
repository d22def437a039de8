//! Epoch-aligned countdown for code rotation. Remaining time derives from the
//! wall-clock second-of-minute modulo the rotation period rather than a
//! stored start instant, so every tab shows the same phase.
//!
//! The display makes no claim about the backend's rotation epoch; if the two
//! clocks are not phase-aligned the countdown can disagree with real code
//! validity.

pub const DEFAULT_PERIOD_SECONDS: u32 = 30;

/// Snapshot recomputed on every tick; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerState {
    pub period_seconds: u32,
    /// Always in `[1, period_seconds]`.
    pub remaining: u32,
    /// True for exactly the tick that opens a new window; the next tick
    /// clears it, which is 1000 ms later.
    pub highlight_active: bool,
}

impl TimerState {
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.remaining) / f64::from(self.period_seconds)
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_fraction() * 100.0
    }
}

/// Computes the state for the given wall-clock second-of-minute.
pub fn tick(second_of_minute: u32, period_seconds: u32) -> TimerState {
    let period_seconds = period_seconds.max(1);
    let remaining = match period_seconds - (second_of_minute % period_seconds) {
        0 => period_seconds,
        value => value,
    };

    TimerState {
        period_seconds,
        remaining,
        highlight_active: remaining == period_seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_window_remaining() {
        let state = tick(47, 30);
        assert_eq!(state.remaining, 13);
        assert!(!state.highlight_active);
    }

    #[test]
    fn window_start_highlights_for_one_tick() {
        let state = tick(30, 30);
        assert_eq!(state.remaining, 30);
        assert!(state.highlight_active);

        let next = tick(31, 30);
        assert_eq!(next.remaining, 29);
        assert!(!next.highlight_active);
    }

    #[test]
    fn minute_start_is_also_a_window_start() {
        let state = tick(0, 30);
        assert_eq!(state.remaining, 30);
        assert!(state.highlight_active);
    }

    #[test]
    fn remaining_stays_within_bounds_over_a_full_minute() {
        for second in 0..60 {
            let state = tick(second, 30);
            assert!(state.remaining >= 1, "zero remaining at second {second}");
            assert!(state.remaining <= 30, "overflow at second {second}");
        }
    }

    #[test]
    fn progress_fraction_tracks_remaining() {
        let state = tick(47, 30);
        let fraction = state.progress_fraction();
        assert!((fraction - 13.0 / 30.0).abs() < f64::EPSILON);
        assert!((state.progress_percent() - fraction * 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_period_is_clamped_instead_of_panicking() {
        let state = tick(15, 0);
        assert_eq!(state.period_seconds, 1);
        assert_eq!(state.remaining, 1);
    }
}
