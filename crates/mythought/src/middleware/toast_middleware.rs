//! Toast Middleware - the notification/toast bridge
//!
//! Turns `ToastAction::Request` into a concrete toast: the free-form kind is
//! mapped to a `ToastVariant` (unknown kinds become info), the bridge-local
//! default duration fills in a missing one, and a dismissal is scheduled on
//! the bridge's own timers. Toasts never touch the notification list.

use std::sync::Arc;
use std::time::Duration;

use crate::actions::{Action, GlobalAction, ToastAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::scheduler::{Clock, Scheduler};
use crate::state::{AppState, Toast, ToastId, ToastVariant};

pub struct ToastMiddleware {
    scheduler: Scheduler<ToastId>,
    default_duration: Duration,
    next_id: u64,
}

impl ToastMiddleware {
    pub fn new(clock: Arc<dyn Clock>, default_duration: Duration) -> Self {
        Self {
            scheduler: Scheduler::new(clock),
            default_duration,
            next_id: 0,
        }
    }
}

impl Middleware for ToastMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Toast(ToastAction::Request {
                kind,
                title,
                description,
                duration,
            }) => {
                let id = ToastId(self.next_id);
                self.next_id += 1;

                let duration = duration.unwrap_or(self.default_duration);
                self.scheduler.schedule(duration, id);

                dispatcher.dispatch(Action::Toast(ToastAction::Show(Toast {
                    id,
                    variant: ToastVariant::from_kind(kind),
                    title: title.clone(),
                    description: description.clone(),
                    duration,
                })));
                false
            }

            Action::Global(GlobalAction::Tick) => {
                for id in self.scheduler.fire_due() {
                    dispatcher.dispatch(Action::Toast(ToastAction::Dismiss(id)));
                }
                true
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualClock;
    use pretty_assertions::assert_eq;

    const DEFAULT: Duration = Duration::from_millis(2500);

    #[test]
    fn test_request_without_duration_uses_default_and_unknown_kind_is_info() {
        let clock = ManualClock::new();
        let (dispatcher, rx) = Dispatcher::queue();
        let mut middleware = ToastMiddleware::new(Arc::new(clock.clone()), DEFAULT);
        let state = AppState::default();

        let request = Action::Toast(ToastAction::Request {
            kind: "celebration".to_string(),
            title: "Launched".to_string(),
            description: None,
            duration: None,
        });
        assert!(!middleware.handle(&request, &state, &dispatcher));

        let shown: Vec<Action> = rx.try_iter().collect();
        let [Action::Toast(ToastAction::Show(toast))] = shown.as_slice() else {
            panic!("expected a single toast, got {:?}", shown);
        };
        assert_eq!(
            *toast,
            Toast {
                id: ToastId(0),
                variant: ToastVariant::Info,
                title: "Launched".to_string(),
                description: None,
                duration: DEFAULT,
            }
        );

        let tick = Action::Global(GlobalAction::Tick);
        clock.advance(DEFAULT - Duration::from_millis(1));
        middleware.handle(&tick, &state, &dispatcher);
        assert!(rx.try_recv().is_err());

        clock.advance(Duration::from_millis(1));
        middleware.handle(&tick, &state, &dispatcher);
        let dismissed: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            dismissed.as_slice(),
            [Action::Toast(ToastAction::Dismiss(ToastId(0)))]
        ));
    }

    #[test]
    fn test_explicit_duration_and_known_kind_are_kept() {
        let clock = ManualClock::new();
        let (dispatcher, rx) = Dispatcher::queue();
        let mut middleware = ToastMiddleware::new(Arc::new(clock), DEFAULT);

        middleware.handle(
            &Action::Toast(ToastAction::Request {
                kind: "warning".to_string(),
                title: "Careful".to_string(),
                description: Some("mind the gap".to_string()),
                duration: Some(Duration::from_millis(900)),
            }),
            &AppState::default(),
            &dispatcher,
        );

        let shown: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            shown.as_slice(),
            [Action::Toast(ToastAction::Show(Toast { variant: ToastVariant::Warning, duration, .. }))]
                if *duration == Duration::from_millis(900)
        ));
    }
}
