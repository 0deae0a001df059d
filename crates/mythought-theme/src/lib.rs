//! Colour palettes for the MyThought showcase.
//!
//! [`ThemeMode`] is the persisted user preference, [`Theme`] the palette the
//! views actually paint with. Switching the mode swaps the whole palette.

use ratatui::{
    prelude::*,
    style::palette::tailwind,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// User-facing theme preference
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// All modes except `self`, in declaration order
    pub fn others(self) -> Vec<ThemeMode> {
        ThemeMode::iter().filter(|mode| *mode != self).collect()
    }
}

/// Application theme - centralized color and style management
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for the given mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,

            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::VIOLET.c400,
            accent_secondary: tailwind::CYAN.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,

            bg_primary: tailwind::SLATE.c50,
            bg_secondary: tailwind::SLATE.c100,
            bg_panel: tailwind::SLATE.c200,

            text_primary: tailwind::SLATE.c900,
            text_secondary: tailwind::SLATE.c700,
            text_muted: tailwind::SLATE.c500,

            accent_primary: tailwind::VIOLET.c600,
            accent_secondary: tailwind::CYAN.c700,

            status_success: tailwind::GREEN.c600,
            status_error: tailwind::RED.c600,
            status_warning: tailwind::AMBER.c600,
            status_info: tailwind::BLUE.c600,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the page background
    pub fn page_background(&self) -> Style {
        Style::default().bg(self.bg_primary).fg(self.text_primary)
    }

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel).fg(self.text_primary)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "+" in "+ increment")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info(&self) -> Style {
        Style::default()
            .fg(self.status_info)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}
