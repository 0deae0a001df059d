//! Store - holds application state and runs the Redux loop
//!
//! `dispatch` runs the middleware chain, the root reducer and the
//! subscribers for one action, then drains every follow-up action that
//! middleware queued on the dispatcher (FIFO) before returning. From the
//! caller's side every action method is therefore synchronous.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use mythought_theme::ThemeMode;

use crate::actions::{Action, CounterAction, GlobalAction, NotificationAction, ThemeAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::{AppState, Notification, NotificationId, NotificationKind};

/// Returned by [`Store::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&AppState)>;

pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (dispatcher, action_rx) = Dispatcher::queue();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher,
            action_rx,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Add middleware to the store; they run in insertion order
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Call `subscriber` after every reduced action
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Process an action and everything it triggers
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);

        while let Ok(next) = self.action_rx.try_recv() {
            self.process(next);
        }
    }

    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if !should_reduce {
            return;
        }

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &action);

        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.dispatch(Action::Theme(ThemeAction::Set(mode)));
    }

    pub fn set_random_theme(&mut self) {
        self.dispatch(Action::Theme(ThemeAction::SetRandom));
    }

    pub fn increment_counter(&mut self) {
        self.dispatch(Action::Counter(CounterAction::Increment));
    }

    pub fn decrement_counter(&mut self) {
        self.dispatch(Action::Counter(CounterAction::Decrement));
    }

    pub fn reset_counter(&mut self) {
        self.dispatch(Action::Counter(CounterAction::Reset));
    }

    /// Add a notification; it is shown as a toast and removed after `duration`
    /// (4s when `None`)
    pub fn add_notification(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: Option<String>,
        duration: Option<Duration>,
    ) -> NotificationId {
        let mut notification = Notification::new(kind, title);
        notification.message = message;
        if let Some(duration) = duration {
            notification.duration = duration;
        }
        let id = notification.id.clone();
        self.dispatch(Action::Notification(NotificationAction::Add(notification)));
        id
    }

    pub fn remove_notification(&mut self, id: &NotificationId) {
        self.dispatch(Action::Notification(NotificationAction::Remove(id.clone())));
    }

    pub fn clear_notifications(&mut self) {
        self.dispatch(Action::Notification(NotificationAction::Clear));
    }

    /// Fire expired timers
    pub fn tick(&mut self) {
        self.dispatch(Action::Global(GlobalAction::Tick));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::BootstrapAction;
    use crate::middleware::default_chain;
    use crate::scheduler::ManualClock;
    use crate::state::{CounterState, CounterStats};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::rc::Rc;
    use std::sync::Arc;

    fn store_with(state: AppState) -> (Store, ManualClock) {
        let clock = ManualClock::new();
        let mut store = Store::new(state);
        for middleware in default_chain(Arc::new(clock.clone()), Duration::from_millis(4000)) {
            store.add_middleware(middleware);
        }
        (store, clock)
    }

    fn store() -> (Store, ManualClock) {
        store_with(AppState::default())
    }

    fn titles(store: &Store) -> Vec<(NotificationKind, String)> {
        store
            .state()
            .notifications
            .items
            .iter()
            .map(|n| (n.kind, n.title.clone()))
            .collect()
    }

    fn with_counter(value: i64) -> AppState {
        AppState {
            counter: CounterState {
                value,
                stats: CounterStats {
                    current_value: value,
                    max_value: value,
                    ..CounterStats::default()
                },
            },
            ..AppState::default()
        }
    }

    #[test]
    fn test_first_increment_starts_counter() {
        let (mut store, _) = store();
        store.increment_counter();

        let counter = store.state().counter;
        assert_eq!(counter.value, 1);
        assert_eq!(
            counter.stats,
            CounterStats {
                total_clicks: 1,
                max_value: 1,
                min_value: 0,
                current_value: 1,
            }
        );
        assert_eq!(
            titles(&store),
            vec![(NotificationKind::Info, "Counter Started".to_string())]
        );
    }

    #[test]
    fn test_decrement_at_zero_is_refused_with_warning() {
        let (mut store, _) = store();
        store.decrement_counter();

        assert_eq!(store.state().counter, CounterState::default());
        assert_eq!(
            titles(&store),
            vec![(NotificationKind::Warning, "Cannot Decrease".to_string())]
        );
    }

    #[test]
    fn test_increment_at_maximum_is_refused_with_warning() {
        let (mut store, _) = store_with(with_counter(i64::MAX));
        let before = store.state().counter;
        store.increment_counter();

        assert_eq!(store.state().counter, before);
        assert_eq!(
            titles(&store),
            vec![(NotificationKind::Warning, "Cannot Increase".to_string())]
        );
    }

    #[test]
    fn test_tenth_increment_is_a_milestone() {
        let (mut store, _) = store_with(with_counter(9));
        store.increment_counter();

        assert_eq!(store.state().counter.value, 10);
        assert_eq!(
            titles(&store),
            vec![(NotificationKind::Success, "Milestone Reached".to_string())]
        );
    }

    #[test]
    fn test_decrement_to_zero_announces_reset() {
        let (mut store, _) = store_with(with_counter(1));
        store.decrement_counter();

        assert_eq!(store.state().counter.value, 0);
        assert_eq!(store.state().counter.stats.total_clicks, 1);
        assert_eq!(
            titles(&store),
            vec![(NotificationKind::Info, "Counter Reset".to_string())]
        );
    }

    #[test]
    fn test_reset_counter_announces_success() {
        let (mut store, _) = store_with(with_counter(4));
        store.reset_counter();

        assert_eq!(store.state().counter.value, 0);
        assert_eq!(store.state().counter.stats.max_value, 4);
        assert_eq!(
            titles(&store),
            vec![(NotificationKind::Success, "Counter Reset".to_string())]
        );
    }

    #[test]
    fn test_notification_expires_after_duration() {
        let (mut store, clock) = store();
        store.add_notification(
            NotificationKind::Info,
            "X",
            None,
            Some(Duration::from_millis(100)),
        );
        assert_eq!(store.state().notifications.len(), 1);

        clock.advance(Duration::from_millis(50));
        store.tick();
        assert_eq!(store.state().notifications.len(), 1);

        clock.advance(Duration::from_millis(51));
        store.tick();
        assert!(store.state().notifications.is_empty());
    }

    #[test]
    fn test_unrepresentable_duration_never_expires() {
        let (mut store, clock) = store();
        let id = store.add_notification(NotificationKind::Info, "x", None, Some(Duration::MAX));
        assert_eq!(store.state().notifications.len(), 1);

        clock.advance(Duration::from_secs(60 * 60 * 24 * 365));
        store.tick();
        assert_eq!(store.state().notifications.items[0].id, id);

        store.remove_notification(&id);
        assert!(store.state().notifications.is_empty());
    }

    #[test]
    fn test_default_duration_is_four_seconds() {
        let (mut store, clock) = store();
        store.add_notification(NotificationKind::Success, "Saved", None, None);

        clock.advance(Duration::from_millis(3999));
        store.tick();
        assert_eq!(store.state().notifications.len(), 1);

        clock.advance(Duration::from_millis(1));
        store.tick();
        assert!(store.state().notifications.is_empty());
    }

    #[test]
    fn test_same_theme_twice_announces_twice() {
        let (mut store, _) = store();
        store.set_theme(ThemeMode::Dark);
        store.set_theme(ThemeMode::Dark);

        assert_eq!(store.state().theme.mode, ThemeMode::Dark);
        assert_eq!(
            titles(&store),
            vec![
                (NotificationKind::Info, "Theme Changed".to_string()),
                (NotificationKind::Info, "Theme Changed".to_string()),
            ]
        );
    }

    #[test]
    fn test_random_theme_always_flips() {
        let (mut store, _) = store();
        for _ in 0..10 {
            let before = store.state().theme.mode;
            store.set_random_theme();
            assert_ne!(store.state().theme.mode, before);
        }
    }

    #[test]
    fn test_add_notification_mirrors_to_toast() {
        let (mut store, _) = store();
        store.add_notification(
            NotificationKind::Error,
            "Boom",
            Some("details".to_string()),
            None,
        );

        let toasts = &store.state().toasts.items;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Boom");
        assert_eq!(toasts[0].description.as_deref(), Some("details"));
        assert_eq!(toasts[0].duration, Duration::from_millis(4000));
    }

    #[test]
    fn test_toast_outlives_removed_notification() {
        let (mut store, clock) = store();
        let id = store.add_notification(NotificationKind::Info, "X", None, None);
        store.remove_notification(&id);

        assert!(store.state().notifications.is_empty());
        assert_eq!(store.state().toasts.len(), 1);

        clock.advance(Duration::from_millis(4000));
        store.tick();
        assert!(store.state().toasts.is_empty());
    }

    #[test]
    fn test_remove_notification_is_idempotent() {
        let (mut store, _) = store();
        let keep = store.add_notification(NotificationKind::Info, "keep", None, None);
        let gone = store.add_notification(NotificationKind::Info, "gone", None, None);

        store.remove_notification(&gone);
        let after_first = store.state().notifications.clone();
        store.remove_notification(&gone);
        store.remove_notification(&NotificationId::from("never-used"));

        assert_eq!(store.state().notifications, after_first);
        assert_eq!(store.state().notifications.items[0].id, keep);
    }

    #[test]
    fn test_clear_then_expiry_is_harmless() {
        let (mut store, clock) = store();
        store.add_notification(NotificationKind::Info, "a", None, None);
        store.add_notification(NotificationKind::Info, "b", None, None);
        store.clear_notifications();
        assert!(store.state().notifications.is_empty());

        let late = store.add_notification(NotificationKind::Info, "late", None, None);
        clock.advance(Duration::from_millis(1000));
        store.tick();
        assert_eq!(store.state().notifications.items[0].id, late);
    }

    #[test]
    fn test_notification_ids_are_unique() {
        let (mut store, _) = store();
        let ids: HashSet<NotificationId> = (0..100)
            .map(|i| store.add_notification(NotificationKind::Info, format!("n{}", i), None, None))
            .collect();
        assert_eq!(ids.len(), 100);
        assert_eq!(store.state().notifications.len(), 100);
    }

    #[test]
    fn test_restored_notifications_expire_after_bootstrap() {
        let mut state = AppState::default();
        state.notifications.push(
            Notification::new(NotificationKind::Info, "from last session")
                .with_duration(Duration::from_millis(200)),
        );
        let (mut store, clock) = store_with(state);
        store.dispatch(Action::Bootstrap(BootstrapAction::Start));

        clock.advance(Duration::from_millis(200));
        store.tick();
        assert!(store.state().notifications.is_empty());
    }

    #[test]
    fn test_subscribers_see_every_reduced_action() {
        let (mut store, _) = store();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let id = store.subscribe(move |_| seen.set(seen.get() + 1));

        store.increment_counter();
        // Increment, notification add, toast show
        assert_eq!(calls.get(), 3);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.increment_counter();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_keys_drive_counter() {
        let (mut store, _) = store();
        let press = |code| {
            Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, KeyModifiers::NONE)))
        };
        store.dispatch(press(KeyCode::Char('+')));
        store.dispatch(press(KeyCode::Char('+')));
        store.dispatch(press(KeyCode::Char('-')));
        assert_eq!(store.state().counter.value, 1);

        store.dispatch(press(KeyCode::Char('q')));
        assert!(!store.state().running);
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Increment,
        Decrement,
        Reset,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![Just(Op::Increment), Just(Op::Decrement), Just(Op::Reset)]
    }

    proptest! {
        #[test]
        fn prop_counter_invariants(start in 0i64..20, ops in prop::collection::vec(op(), 0..40)) {
            let (mut store, _) = store_with(with_counter(start));
            let mut mutating_clicks = 0u64;

            for op in ops {
                let before = store.state().counter;
                match op {
                    Op::Increment => {
                        store.increment_counter();
                        mutating_clicks += 1;
                    }
                    Op::Decrement => {
                        store.decrement_counter();
                        if before.value > 0 {
                            mutating_clicks += 1;
                        } else {
                            prop_assert_eq!(store.state().counter, before);
                        }
                    }
                    Op::Reset => {
                        store.reset_counter();
                        let after = store.state().counter;
                        prop_assert_eq!(after.value, 0);
                        prop_assert_eq!(after.stats.current_value, 0);
                        prop_assert_eq!(after.stats.total_clicks, before.stats.total_clicks);
                        prop_assert_eq!(after.stats.max_value, before.stats.max_value);
                        prop_assert_eq!(after.stats.min_value, before.stats.min_value);
                    }
                }
                prop_assert!(store.state().counter.value >= 0);
                prop_assert_eq!(store.state().counter.stats.total_clicks, mutating_clicks);
            }
        }
    }
}
