//! Shared UI components exported for routes.

mod copy_button;
mod otp_field;
mod token_countdown;
pub(crate) mod ui;

pub(crate) use copy_button::CopyButton;
pub(crate) use otp_field::OtpField;
pub(crate) use token_countdown::TokenCountdown;
pub(crate) use ui::{Alert, AlertKind, Button};
