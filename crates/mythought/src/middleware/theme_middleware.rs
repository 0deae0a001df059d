//! Theme Middleware
//!
//! Resolves `SetRandom` into a concrete `Set` and announces every theme
//! change, including re-applying the current theme.

use mythought_theme::ThemeMode;

use crate::actions::{Action, NotificationAction, ThemeAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct ThemeMiddleware;

impl ThemeMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThemeMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform pick; uuid v4 bits serve as the random source
fn pick_random(candidates: &[ThemeMode]) -> Option<ThemeMode> {
    if candidates.is_empty() {
        return None;
    }
    let roll = uuid::Uuid::new_v4().as_u128();
    let index = (roll % candidates.len() as u128) as usize;
    candidates.get(index).copied()
}

impl Middleware for ThemeMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Theme(ThemeAction::SetRandom) => {
                let current = state.theme.mode;
                match pick_random(&current.others()) {
                    Some(mode) => {
                        log::info!("ThemeMiddleware: random theme {} -> {}", current, mode);
                        dispatcher.dispatch(Action::Theme(ThemeAction::Set(mode)));
                    }
                    None => log::warn!("ThemeMiddleware: no alternative to {}", current),
                }
                false
            }

            Action::Theme(ThemeAction::Set(mode)) => {
                dispatcher.dispatch(Action::Notification(NotificationAction::info(
                    "Theme Changed",
                    format!("Switched to {} mode", mode),
                )));
                true
            }

            _ => true,
        }
    }
}
