//! Two-factor routes: token verification during login and authenticator
//! enrollment.

mod setup;
mod verify;

pub(crate) use setup::TwoFactorSetupPage;
pub(crate) use verify::TwoFactorVerifyPage;
