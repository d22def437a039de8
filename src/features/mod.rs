//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused; the auth state machines live here and
//! own no DOM state of their own.

pub(crate) mod auth;
