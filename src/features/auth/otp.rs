//! OTP digit-capture state machine. One canonical machine drives every token
//! field; the owning component carries out the returned action with a
//! cancellable one-shot timer. `Submitting` is terminal for the page's
//! lifetime, since a successful submission navigates away.

pub const OTP_LENGTH: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtpPhase {
    Empty,
    PartiallyEntered,
    Complete,
    Submitting,
}

/// Side effect the owning component must carry out after an input event.
/// Completion schedules the delayed submission; any shorter edit cancels a
/// pending one, so a stale snapshot can never fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtpAction {
    None,
    ScheduleSubmit,
    CancelPending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpState {
    digits: String,
    phase: OtpPhase,
}

/// Strips non-digit characters and truncates to six digits.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(OTP_LENGTH)
        .collect()
}

impl OtpState {
    pub const fn new() -> Self {
        Self {
            digits: String::new(),
            phase: OtpPhase::Empty,
        }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn phase(&self) -> OtpPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == OtpPhase::Complete
    }

    /// Applies one input event: normalizes the raw value and recomputes the
    /// phase from the resulting length. Input is ignored once submitting.
    pub fn apply_input(&mut self, raw: &str) -> OtpAction {
        if self.phase == OtpPhase::Submitting {
            return OtpAction::None;
        }

        self.digits = normalize(raw);
        if self.digits.len() == OTP_LENGTH {
            self.phase = OtpPhase::Complete;
            OtpAction::ScheduleSubmit
        } else {
            self.phase = if self.digits.is_empty() {
                OtpPhase::Empty
            } else {
                OtpPhase::PartiallyEntered
            };
            OtpAction::CancelPending
        }
    }

    /// Marks the terminal state once the delayed submission fires.
    pub fn mark_submitting(&mut self) {
        self.phase = OtpPhase::Submitting;
    }
}

impl Default for OtpState {
    fn default() -> Self {
        Self::new()
    }
}
