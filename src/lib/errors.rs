//! Error taxonomy for the authentication surface. Per-field validation
//! failures are plain values (`ValidationResult`), never errors; this enum
//! covers the remaining failure classes. Nothing here is fatal: every variant
//! resolves through corrected input or a retried action.

use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    /// Page or build configuration contract violated, such as missing
    /// template-supplied enrollment data.
    Config(String),
    /// Clipboard capability unavailable or the write was rejected.
    Clipboard(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Clipboard(message) => write!(formatter, "Clipboard error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
