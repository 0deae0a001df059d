//! Toast State
//!
//! Toasts are the ephemeral on-screen rendering of notifications. They are
//! created from the same "add" event as store notifications but have their
//! own lifecycle: a toast can outlive its notification and vice versa.

use std::fmt;
use std::time::Duration;
use strum::{Display, EnumString};

/// Visual presentation of a toast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ToastVariant {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastVariant {
    /// Map a free-form kind, anything unrecognised renders as `Info`
    pub fn from_kind(kind: &str) -> Self {
        kind.parse().unwrap_or_default()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Error => "✖",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub variant: ToastVariant,
    pub title: String,
    pub description: Option<String>,
    pub duration: Duration,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    pub fn show(&mut self, toast: Toast) {
        self.items.push(toast);
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.items.retain(|t| t.id != id);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_mapping_falls_back_to_info() {
        assert_eq!(ToastVariant::from_kind("success"), ToastVariant::Success);
        assert_eq!(ToastVariant::from_kind("Error"), ToastVariant::Error);
        assert_eq!(ToastVariant::from_kind("warning"), ToastVariant::Warning);
        assert_eq!(ToastVariant::from_kind("info"), ToastVariant::Info);
        assert_eq!(ToastVariant::from_kind("celebration"), ToastVariant::Info);
        assert_eq!(ToastVariant::from_kind(""), ToastVariant::Info);
    }
}
