//! Persistence of the UI state
//!
//! The store never writes to storage itself. A [`Persister`] subscribes to
//! the store and saves the snapshot whenever the persisted slice (theme,
//! counter with stats, notifications) changes. Failing writes are logged and
//! otherwise ignored.

use std::time::Duration;

use mythought_config::{
    save_snapshot, AppConfig, PersistedState, SnapshotStorage, StoredNotification, StoredStats,
};
use mythought_theme::Theme;

use crate::state::{
    AppState, CounterState, CounterStats, Notification, NotificationKind, NotificationState,
};

/// The persisted slice of `state`
pub fn to_persisted(state: &AppState) -> PersistedState {
    let stats = state.counter.stats;
    PersistedState {
        theme: state.theme.mode,
        counter: state.counter.value,
        stats: StoredStats {
            total_clicks: stats.total_clicks,
            max_value: stats.max_value,
            min_value: stats.min_value,
            current_value: stats.current_value,
        },
        notifications: state
            .notifications
            .items
            .iter()
            .map(|n| StoredNotification {
                id: n.id.to_string(),
                kind: n.kind.to_string(),
                title: n.title.clone(),
                message: n.message.clone(),
                duration_ms: u64::try_from(n.duration.as_millis()).unwrap_or(u64::MAX),
            })
            .collect(),
    }
}

/// Initial application state from a restored snapshot
pub fn restore(persisted: &PersistedState, app_config: AppConfig) -> AppState {
    let stats = persisted.stats;
    AppState {
        theme: Theme::for_mode(persisted.theme),
        counter: CounterState {
            value: persisted.counter,
            stats: CounterStats {
                total_clicks: stats.total_clicks,
                max_value: stats.max_value,
                min_value: stats.min_value,
                current_value: stats.current_value,
            },
        },
        notifications: NotificationState {
            items: persisted
                .notifications
                .iter()
                .map(|stored| Notification {
                    id: stored.id.clone().into(),
                    kind: NotificationKind::from_stored(&stored.kind),
                    title: stored.title.clone(),
                    message: stored.message.clone(),
                    duration: Duration::from_millis(stored.duration_ms),
                })
                .collect(),
        },
        app_config,
        ..AppState::default()
    }
}

/// Store subscriber writing snapshots on change
pub struct Persister {
    storage: Box<dyn SnapshotStorage>,
    last_saved: Option<PersistedState>,
}

impl Persister {
    /// `loaded` is what the storage currently holds, so an unchanged state
    /// is not written back on startup
    pub fn new(storage: Box<dyn SnapshotStorage>, loaded: Option<PersistedState>) -> Self {
        Self {
            storage,
            last_saved: loaded,
        }
    }

    pub fn observe(&mut self, state: &AppState) {
        let snapshot = to_persisted(state);
        if self.last_saved.as_ref() == Some(&snapshot) {
            return;
        }

        match save_snapshot(self.storage.as_ref(), &snapshot) {
            Ok(()) => self.last_saved = Some(snapshot),
            Err(e) => log::error!("Failed to persist UI state: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mythought_config::{load_snapshot, MemoryStorage};
    use mythought_theme::ThemeMode;
    use pretty_assertions::assert_eq;
    use std::io;

    fn sample_state() -> AppState {
        let mut state = AppState {
            theme: Theme::light(),
            counter: CounterState {
                value: 3,
                stats: CounterStats {
                    total_clicks: 5,
                    max_value: 4,
                    min_value: 0,
                    current_value: 3,
                },
            },
            ..AppState::default()
        };
        state.notifications.push(
            Notification::new(NotificationKind::Warning, "Careful")
                .with_message("mind the gap")
                .with_duration(Duration::from_millis(1500)),
        );
        state
    }

    #[test]
    fn test_restore_reverses_to_persisted() {
        let state = sample_state();
        let persisted = to_persisted(&state);
        assert_eq!(persisted.theme, ThemeMode::Light);
        assert_eq!(persisted.notifications[0].kind, "warning");

        let restored = restore(&persisted, AppConfig::default());
        assert_eq!(restored.theme, Theme::light());
        assert_eq!(restored.counter, state.counter);
        assert_eq!(restored.notifications, state.notifications);
    }

    #[test]
    fn test_persister_writes_only_on_change() {
        let storage = MemoryStorage::new();
        let mut persister = Persister::new(Box::new(storage.clone()), None);
        let state = sample_state();

        persister.observe(&state);
        let first = storage.read().unwrap();
        assert!(first.is_some());
        assert_eq!(load_snapshot(&storage), to_persisted(&state));

        // An unchanged slice must not rewrite the blob (saved_at would change)
        persister.observe(&state);
        assert_eq!(storage.read().unwrap(), first);

        let mut changed = state.clone();
        changed.counter.value = 4;
        persister.observe(&changed);
        assert_eq!(load_snapshot(&storage).counter, 4);
    }

    #[test]
    fn test_toasts_and_scroll_are_not_persisted() {
        let storage = MemoryStorage::new();
        let initial = to_persisted(&AppState::default());
        let mut persister = Persister::new(Box::new(storage.clone()), Some(initial));

        let mut state = AppState::default();
        state.services_scroll = 12;
        persister.observe(&state);
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_counter_at_maximum_restores_as_defaults() {
        use crate::middleware::default_chain;
        use crate::scheduler::SystemClock;
        use crate::store::Store;
        use std::sync::Arc;

        let blob = r#"{"version": 1, "saved_at": "2026-01-01T00:00:00Z", "state": {"counter": 9223372036854775807}}"#;
        let persisted = load_snapshot(&MemoryStorage::with_blob(blob));
        assert_eq!(persisted, PersistedState::default());

        let mut store = Store::new(restore(&persisted, AppConfig::default()));
        for middleware in default_chain(Arc::new(SystemClock), Duration::from_millis(4000)) {
            store.add_middleware(middleware);
        }
        store.increment_counter();
        assert_eq!(store.state().counter.value, 1);
    }

    struct BrokenStorage;

    impl SnapshotStorage for BrokenStorage {
        fn read(&self) -> io::Result<Option<String>> {
            Ok(None)
        }

        fn write(&self, _blob: &str) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let mut persister = Persister::new(Box::new(BrokenStorage), None);
        persister.observe(&sample_state());
        persister.observe(&sample_state());
    }
}
