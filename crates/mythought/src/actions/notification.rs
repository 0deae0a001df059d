//! Notification list actions

use crate::state::{Notification, NotificationId, NotificationKind};

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationAction {
    /// Append to the list, show a toast and start the auto-removal timer
    Add(Notification),
    /// Remove by id; absent ids are ignored
    Remove(NotificationId),
    /// Empty the list and cancel all pending auto-removals
    Clear,
}

impl NotificationAction {
    /// Add a notification with the default duration
    pub fn add(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Add(Notification::new(kind, title).with_message(message))
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::add(NotificationKind::Info, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::add(NotificationKind::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::add(NotificationKind::Warning, title, message)
    }
}
