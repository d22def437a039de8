//! Auth feature module covering field validation, password strength scoring,
//! OTP digit capture, the rotation countdown, and clipboard access. The state
//! machines here are pure and synchronous; components and routes own the
//! timers and DOM side effects. This module handles credential input and must
//! never log field values.

pub(crate) mod clipboard;
pub(crate) mod countdown;
pub(crate) mod forms;
pub(crate) mod otp;
pub(crate) mod rules;
pub(crate) mod strength;
