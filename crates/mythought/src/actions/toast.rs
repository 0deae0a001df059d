//! Toast bridge actions

use std::time::Duration;

use crate::state::{Toast, ToastId};

#[derive(Debug, Clone, PartialEq)]
pub enum ToastAction {
    /// Ask the bridge for a toast. `kind` is free-form; unknown kinds render as info.
    Request {
        kind: String,
        title: String,
        description: Option<String>,
        /// Bridge default applies when `None`
        duration: Option<Duration>,
    },
    /// Put a resolved toast on screen
    Show(Toast),
    /// Take a toast off screen (timer expiry or manual dismissal)
    Dismiss(ToastId),
}
