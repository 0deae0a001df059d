//! Application State

use mythought_config::AppConfig;
use mythought_theme::Theme;

use super::{CounterState, NotificationState, ToastState};
use crate::views::{HomeView, View};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Page currently shown below the navigation bar
    pub active_view: Box<dyn View>,
    /// Active palette; `theme.mode` is the persisted preference
    pub theme: Theme,
    pub counter: CounterState,
    pub notifications: NotificationState,
    /// Toasts live independently of `notifications`
    pub toasts: ToastState,
    /// First visible row of the services page
    pub services_scroll: u16,
    pub app_config: AppConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            active_view: Box::new(HomeView::new()),
            theme: Theme::default(),
            counter: CounterState::default(),
            notifications: NotificationState::default(),
            toasts: ToastState::default(),
            services_scroll: 0,
            app_config: AppConfig::default(),
        }
    }
}
