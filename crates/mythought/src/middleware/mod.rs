use std::sync::Arc;
use std::time::Duration;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::scheduler::Clock;
use crate::state::AppState;

pub mod counter_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod notification_middleware;
pub mod theme_middleware;
pub mod toast_middleware;

pub use counter_middleware::CounterMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use logging::LoggingMiddleware;
pub use notification_middleware::NotificationMiddleware;
pub use theme_middleware::ThemeMiddleware;
pub use toast_middleware::ToastMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}

/// The application's middleware chain, in execution order
pub fn default_chain(clock: Arc<dyn Clock>, toast_duration: Duration) -> Vec<Box<dyn Middleware>> {
    vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(ThemeMiddleware::new()),
        Box::new(CounterMiddleware::new()),
        Box::new(NotificationMiddleware::new(clock.clone())),
        Box::new(ToastMiddleware::new(clock, toast_duration)),
    ]
}
