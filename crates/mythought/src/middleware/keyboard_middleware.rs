//! KeyboardMiddleware - translates keyboard events into semantic actions
//!
//! Two layers:
//! 1. Global keys that work on every page (quit, page switching, theme)
//! 2. Page keys, looked up by the active view
//!
//! Raw key presses are always consumed.

use mythought_theme::ThemeMode;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::{
    Action, CounterAction, GlobalAction, NotificationAction, ThemeAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::{HomeView, ServicesView, View, ViewId};

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: i32 = 10;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn global_action(&self, key: KeyEvent, state: &AppState) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Global(GlobalAction::Quit));
        }

        let switch_to = |view: Box<dyn View>| Some(Action::Global(GlobalAction::ReplaceView(view)));
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Global(GlobalAction::Quit)),
            KeyCode::Tab | KeyCode::BackTab => match state.active_view.view_id() {
                ViewId::Home => switch_to(Box::new(ServicesView::new())),
                ViewId::Services => switch_to(Box::new(HomeView::new())),
            },
            KeyCode::Char('1') => switch_to(Box::new(HomeView::new())),
            KeyCode::Char('2') => switch_to(Box::new(ServicesView::new())),
            KeyCode::Char('t') => Some(Action::Theme(ThemeAction::SetRandom)),
            KeyCode::Char('l') => Some(Action::Theme(ThemeAction::Set(ThemeMode::Light))),
            KeyCode::Char('d') => Some(Action::Theme(ThemeAction::Set(ThemeMode::Dark))),
            _ => None,
        }
    }

    fn home_action(&self, key: KeyEvent, state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                Some(Action::Counter(CounterAction::Increment))
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => {
                Some(Action::Counter(CounterAction::Decrement))
            }
            KeyCode::Char('r') => Some(Action::Counter(CounterAction::Reset)),
            KeyCode::Char('n') => Some(Action::Notification(NotificationAction::info(
                "Hello",
                "Thanks for stopping by",
            ))),
            KeyCode::Char('x') => state
                .notifications
                .items
                .first()
                .map(|n| Action::Notification(NotificationAction::Remove(n.id.clone()))),
            KeyCode::Char('c') => Some(Action::Notification(NotificationAction::Clear)),
            _ => None,
        }
    }

    fn services_action(&self, key: KeyEvent) -> Option<Action> {
        let delta = match key.code {
            KeyCode::Down | KeyCode::Char('j') => 1,
            KeyCode::Up | KeyCode::Char('k') => -1,
            KeyCode::PageDown | KeyCode::Char(' ') => PAGE_ROWS,
            KeyCode::PageUp => -PAGE_ROWS,
            KeyCode::Home | KeyCode::Char('g') => i32::MIN,
            KeyCode::End | KeyCode::Char('G') => i32::MAX,
            _ => return None,
        };
        Some(Action::Global(GlobalAction::ScrollBy(delta)))
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        let translated = self.global_action(*key, state).or_else(|| {
            match state.active_view.view_id() {
                ViewId::Home => self.home_action(*key, state),
                ViewId::Services => self.services_action(*key),
            }
        });

        match translated {
            Some(action) => dispatcher.dispatch(action),
            None => log::trace!("KeyboardMiddleware: unbound key {:?}", key.code),
        }
        false
    }
}
