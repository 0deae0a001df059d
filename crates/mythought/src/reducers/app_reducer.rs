use mythought_theme::Theme;

use crate::actions::{Action, GlobalAction, ThemeAction};
use crate::content;
use crate::reducers::{counter_reducer, notification_reducer, toast_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::ReplaceView(new_view)) => {
            log::debug!("Replacing view with: {:?}", new_view.view_id());
            state.active_view = new_view.clone();
        }
        Action::Global(GlobalAction::ScrollBy(delta)) => {
            let max = i64::from(content::services_height());
            let next = (i64::from(state.services_scroll) + i64::from(*delta)).clamp(0, max);
            state.services_scroll = u16::try_from(next).unwrap_or(u16::MAX);
        }
        Action::Theme(ThemeAction::Set(mode)) => {
            // Swapping the palette is what "applying" a theme means here
            state.theme = Theme::for_mode(*mode);
        }
        Action::Counter(counter_action) => {
            state.counter = counter_reducer::reduce(state.counter, counter_action);
        }
        Action::Notification(notification_action) => {
            state.notifications =
                notification_reducer::reduce(state.notifications, notification_action);
        }
        Action::Toast(toast_action) => {
            state.toasts = toast_reducer::reduce(state.toasts, toast_action);
        }
        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{ServicesView, ViewId};
    use mythought_theme::ThemeMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_set_theme_swaps_palette() {
        let state = reduce(
            AppState::default(),
            &Action::Theme(ThemeAction::Set(ThemeMode::Light)),
        );
        assert_eq!(state.theme, Theme::light());
    }

    #[test]
    fn test_random_theme_is_left_to_middleware() {
        let state = reduce(AppState::default(), &Action::Theme(ThemeAction::SetRandom));
        assert_eq!(state.theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_replace_view() {
        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::ReplaceView(Box::new(ServicesView::new()))),
        );
        assert_eq!(state.active_view.view_id(), ViewId::Services);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::ScrollBy(-5)));
        assert_eq!(state.services_scroll, 0);

        let state = reduce(state, &Action::Global(GlobalAction::ScrollBy(7)));
        assert_eq!(state.services_scroll, 7);

        let state = reduce(state, &Action::Global(GlobalAction::ScrollBy(i32::MAX)));
        assert_eq!(state.services_scroll, content::services_height());
    }
}
