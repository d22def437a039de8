mod alert;
mod button;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
