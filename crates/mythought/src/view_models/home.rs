//! Home View Model
//!
//! Pre-computes presentation data for the counter, theme and notification
//! panels of the home page.

use mythought_theme::{Theme, ThemeMode};
use ratatui::style::{Modifier, Style};
use strum::IntoEnumIterator;

use crate::state::{AppState, NotificationKind};

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationLine {
    pub emoji: &'static str,
    pub title: String,
    pub message: Option<String>,
    pub title_style: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeViewModel {
    pub counter_value: String,
    pub counter_style: Style,
    /// (label, value) rows for the stats table
    pub stats: Vec<(&'static str, String)>,
    pub decrement_hint_style: Style,
    pub theme_label: String,
    /// Every mode with a flag for the active one
    pub theme_modes: Vec<(ThemeMode, bool)>,
    /// Oldest first
    pub notifications: Vec<NotificationLine>,
}

fn kind_style(kind: NotificationKind, theme: &Theme) -> Style {
    match kind {
        NotificationKind::Info => theme.info(),
        NotificationKind::Success => theme.success(),
        NotificationKind::Warning => theme.warning(),
        NotificationKind::Error => theme.error(),
    }
}

impl HomeViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let counter = &state.counter;

        let counter_style = if counter.value > 0 && counter.value % 10 == 0 {
            theme.success().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        };

        let decrement_hint_style = if counter.can_decrement() {
            theme.key_hint()
        } else {
            theme.muted()
        };

        Self {
            counter_value: counter.value.to_string(),
            counter_style,
            stats: vec![
                ("Total clicks", counter.stats.total_clicks.to_string()),
                ("Max", counter.stats.max_value.to_string()),
                ("Min", counter.stats.min_value.to_string()),
                ("Current", counter.stats.current_value.to_string()),
            ],
            decrement_hint_style,
            theme_label: format!("{} mode", theme.mode),
            theme_modes: ThemeMode::iter()
                .map(|mode| (mode, mode == theme.mode))
                .collect(),
            notifications: state
                .notifications
                .items
                .iter()
                .map(|n| NotificationLine {
                    emoji: n.kind.emoji(),
                    title: n.title.clone(),
                    message: n.message.clone(),
                    title_style: kind_style(n.kind, theme),
                })
                .collect(),
        }
    }
}
