//! Shared frontend utilities: configuration, errors, scheduled tasks, and
//! build metadata.
//!
//! ## Surface Overview
//!
//! The authentication surface is a set of server-posted forms enhanced with
//! client-side behavior. Nothing here performs network calls; a form that
//! passes validation proceeds with the browser's default submission to the
//! template-declared destination.
//!
//! 1. **Sign in / Register:** inline validation gates the native POST.
//! 2. **Two-factor verify:** digit capture auto-submits a complete code after
//!    a short confirmation delay, while the rotation countdown runs beside it.
//! 3. **Two-factor setup:** the enrollment secret and QR image come from the
//!    host page (`window.AULA_PAGE`); the copy button places the secret on the
//!    system clipboard.
//!
//! Callers must never log field values or the enrollment secret.

pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod schedule;

pub(crate) use errors::AppError;
