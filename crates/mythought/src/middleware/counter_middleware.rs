//! Counter Middleware
//!
//! Guards decrementing below zero and incrementing past the maximum, and
//! announces counter milestones.

use crate::actions::{Action, CounterAction, NotificationAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct CounterMiddleware;

impl CounterMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CounterMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for CounterMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Counter(counter_action) = action else {
            return true;
        };
        let current = state.counter.value;

        match counter_action {
            CounterAction::Increment => {
                let Some(new) = current.checked_add(1) else {
                    log::warn!("CounterMiddleware: refusing increment at {}", current);
                    dispatcher.dispatch(Action::Notification(NotificationAction::warning(
                        "Cannot Increase",
                        "The counter is at its maximum",
                    )));
                    return false;
                };
                if new % 10 == 0 {
                    dispatcher.dispatch(Action::Notification(NotificationAction::success(
                        "Milestone Reached",
                        format!("The counter hit {}", new),
                    )));
                } else if new == 1 {
                    dispatcher.dispatch(Action::Notification(NotificationAction::info(
                        "Counter Started",
                        "Counting from one",
                    )));
                }
                true
            }

            CounterAction::Decrement => {
                if !state.counter.can_decrement() {
                    log::debug!("CounterMiddleware: refusing decrement at {}", current);
                    dispatcher.dispatch(Action::Notification(NotificationAction::warning(
                        "Cannot Decrease",
                        "The counter cannot go below zero",
                    )));
                    return false;
                }
                if current - 1 == 0 {
                    dispatcher.dispatch(Action::Notification(NotificationAction::info(
                        "Counter Reset",
                        "Back at zero",
                    )));
                }
                true
            }

            CounterAction::Reset => {
                dispatcher.dispatch(Action::Notification(NotificationAction::success(
                    "Counter Reset",
                    "The counter was reset to zero",
                )));
                true
            }
        }
    }
}
