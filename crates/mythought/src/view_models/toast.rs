//! Toast View Model

use ratatui::style::{Color, Style};

use crate::state::{AppState, ToastVariant};

#[derive(Debug, Clone, PartialEq)]
pub struct ToastCard {
    pub icon: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub accent: Color,
    pub body_style: Style,
}

/// Toasts to draw, newest first
#[derive(Debug, Clone, PartialEq)]
pub struct ToastStackViewModel {
    pub cards: Vec<ToastCard>,
    pub background: Style,
}

impl ToastStackViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let cards = state
            .toasts
            .items
            .iter()
            .rev()
            .map(|toast| ToastCard {
                icon: toast.variant.icon(),
                title: toast.title.clone(),
                description: toast.description.clone(),
                accent: match toast.variant {
                    ToastVariant::Success => theme.status_success,
                    ToastVariant::Error => theme.status_error,
                    ToastVariant::Warning => theme.status_warning,
                    ToastVariant::Info => theme.status_info,
                },
                body_style: theme.text(),
            })
            .collect();

        Self {
            cards,
            background: theme.panel_background(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
