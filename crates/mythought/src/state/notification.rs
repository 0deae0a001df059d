//! Notification State

use chrono::Utc;
use std::fmt;
use std::time::Duration;
use strum::{Display, EnumIter, EnumString};

/// Applied when a notification is added without an explicit duration
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(4000);

/// Kind of notification (determines icon and color)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Parse a stored kind, unknown kinds degrade to `Info`
    pub fn from_stored(kind: &str) -> Self {
        kind.parse().unwrap_or_else(|_| {
            log::debug!("Unknown notification kind {:?}, using info", kind);
            Self::Info
        })
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Info => "ℹ️",
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Error => "🚨",
        }
    }
}

/// Unique notification id: creation time in milliseconds plus a random suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn generate() -> Self {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self(format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            suffix.get(..12).unwrap_or(&suffix)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NotificationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    /// Time until automatic removal
    pub duration: Duration,
}

impl Notification {
    /// New notification with a fresh id and the default duration
    pub fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            id: NotificationId::generate(),
            kind,
            title: title.into(),
            message: None,
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Notification list, insertion ordered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
}

impl NotificationState {
    pub fn contains(&self, id: &NotificationId) -> bool {
        self.items.iter().any(|n| &n.id == id)
    }

    pub fn push(&mut self, notification: Notification) {
        if self.contains(&notification.id) {
            log::warn!("Notification {} already present, ignoring", notification.id);
            return;
        }
        self.items.push(notification);
    }

    /// Remove by id; absent ids are a no-op
    pub fn remove(&mut self, id: &NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| &n.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
