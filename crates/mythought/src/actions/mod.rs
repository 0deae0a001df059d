//! Actions module
//!
//! All actions in the application, tagged by domain:
//! - `Global`: application-wide actions (keys, quit, page switch, tick)
//! - `Bootstrap`: startup sequence
//! - `Theme`, `Counter`, `Notification`, `Toast`: the store's domains

pub mod bootstrap;
pub mod counter;
pub mod global;
pub mod notification;
pub mod theme;
pub mod toast;

pub use bootstrap::BootstrapAction;
pub use counter::CounterAction;
pub use global::GlobalAction;
pub use notification::NotificationAction;
pub use theme::ThemeAction;
pub use toast::ToastAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Bootstrap/initialization actions
    Bootstrap(BootstrapAction),
    /// Theme preference
    Theme(ThemeAction),
    /// Demo counter
    Counter(CounterAction),
    /// Store notification list
    Notification(NotificationAction),
    /// Toast bridge
    Toast(ToastAction),
}

impl Action {
    /// Tick actions are frequent; loggers tone them down
    pub fn is_tick(&self) -> bool {
        matches!(self, Action::Global(GlobalAction::Tick))
    }
}
