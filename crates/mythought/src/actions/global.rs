//! Global actions - not tied to any specific page

use ratatui::crossterm::event::KeyEvent;

use crate::views::View;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
    /// Show another page
    ReplaceView(Box<dyn View>),
    /// Scroll the services page by the given number of rows
    ScrollBy(i32),
    /// Periodic tick, drives timers
    Tick,
}
