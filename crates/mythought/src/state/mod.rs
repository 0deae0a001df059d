//! Application state

mod app;
mod counter;
mod notification;
mod toast;

pub use app::AppState;
pub use counter::{CounterState, CounterStats};
pub use notification::{
    Notification, NotificationId, NotificationKind, NotificationState,
    DEFAULT_NOTIFICATION_DURATION,
};
pub use toast::{Toast, ToastId, ToastState, ToastVariant};
