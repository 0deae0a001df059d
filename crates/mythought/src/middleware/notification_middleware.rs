//! Notification Middleware
//!
//! Side effects of the notification list:
//! - every added notification is mirrored to the toast bridge
//! - every notification gets a one-shot auto-removal timer, whose handle is
//!   kept next to the notification id
//! - explicit removal and clearing cancel the pending timers
//! - notifications restored from a previous session get fresh timers on
//!   bootstrap

use std::collections::HashMap;
use std::sync::Arc;

use crate::actions::{Action, BootstrapAction, GlobalAction, NotificationAction, ToastAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::scheduler::{Clock, Scheduler, TimerHandle};
use crate::state::{AppState, Notification, NotificationId};

pub struct NotificationMiddleware {
    scheduler: Scheduler<NotificationId>,
    timers: HashMap<NotificationId, TimerHandle>,
}

impl NotificationMiddleware {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            scheduler: Scheduler::new(clock),
            timers: HashMap::new(),
        }
    }

    /// Auto-removals not yet fired or cancelled
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    fn schedule_removal(&mut self, notification: &Notification) {
        let handle = self
            .scheduler
            .schedule(notification.duration, notification.id.clone());
        if let Some(previous) = self.timers.insert(notification.id.clone(), handle) {
            self.scheduler.cancel(previous);
        }
    }

    fn cancel_removal(&mut self, id: &NotificationId) {
        if let Some(handle) = self.timers.remove(id) {
            self.scheduler.cancel(handle);
        }
    }
}

impl Middleware for NotificationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Notification(NotificationAction::Add(notification)) => {
                if state.notifications.contains(&notification.id) {
                    log::warn!("Notification {} already present", notification.id);
                    return false;
                }
                self.schedule_removal(notification);
                dispatcher.dispatch(Action::Toast(ToastAction::Request {
                    kind: notification.kind.to_string(),
                    title: notification.title.clone(),
                    description: notification.message.clone(),
                    duration: Some(notification.duration),
                }));
                true
            }

            Action::Notification(NotificationAction::Remove(id)) => {
                self.cancel_removal(id);
                true
            }

            Action::Notification(NotificationAction::Clear) => {
                let cancelled = self.scheduler.clear();
                self.timers.clear();
                log::debug!("NotificationMiddleware: cancelled {} auto-removals", cancelled);
                true
            }

            Action::Bootstrap(BootstrapAction::Start) => {
                for notification in &state.notifications.items {
                    self.schedule_removal(notification);
                }
                if !state.notifications.is_empty() {
                    log::info!(
                        "NotificationMiddleware: rescheduled {} restored notifications",
                        state.notifications.len()
                    );
                }
                true
            }

            Action::Global(GlobalAction::Tick) => {
                for id in self.scheduler.fire_due() {
                    self.timers.remove(&id);
                    log::debug!("NotificationMiddleware: notification {} expired", id);
                    dispatcher.dispatch(Action::Notification(NotificationAction::Remove(id)));
                }
                true
            }

            _ => true,
        }
    }
}
