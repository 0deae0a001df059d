//! Migration of snapshots written before the blob carried a layout version
//!
//! Legacy blobs used camelCase keys, kept the state either at the top level
//! or wrapped in `{"state": .., "version": 0}`, and stored the notification
//! kind under `type` with the duration in plain milliseconds.
//!
//! # Migrations
//!
//! - unversioned / version 0 -> version 1

use serde::Deserialize;

use crate::snapshot::{PersistedState, SnapshotError, StoredNotification, StoredStats};

const DEFAULT_DURATION_MS: u64 = 4000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyState {
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    counter: Option<i64>,
    #[serde(default)]
    stats: Option<LegacyStats>,
    #[serde(default)]
    notifications: Vec<LegacyNotification>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LegacyStats {
    total_clicks: u64,
    max_value: i64,
    min_value: i64,
    current_value: i64,
}

#[derive(Debug, Deserialize)]
struct LegacyNotification {
    id: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    title: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    duration: Option<u64>,
}

/// Convert a legacy blob into the current layout
pub fn from_legacy(value: serde_json::Value) -> Result<PersistedState, SnapshotError> {
    let inner = match value {
        serde_json::Value::Object(mut map) if map.contains_key("state") => map
            .remove("state")
            .unwrap_or(serde_json::Value::Null),
        other => other,
    };

    let legacy: LegacyState = serde_json::from_value(inner)?;
    log::info!("Migrating unversioned UI state snapshot");

    // An unknown theme string falls back to the default rather than failing the whole blob
    let theme = legacy
        .theme
        .as_deref()
        .and_then(|t| t.parse().ok())
        .unwrap_or_default();

    let counter = legacy.counter.unwrap_or(0);
    // Blobs without stats still need a maximum that covers the counter
    let stats = legacy.stats.unwrap_or(LegacyStats {
        max_value: counter,
        current_value: counter,
        ..LegacyStats::default()
    });

    Ok(PersistedState {
        theme,
        counter,
        stats: StoredStats {
            total_clicks: stats.total_clicks,
            max_value: stats.max_value,
            min_value: stats.min_value,
            current_value: stats.current_value,
        },
        notifications: legacy
            .notifications
            .into_iter()
            .map(|n| StoredNotification {
                id: n.id,
                kind: n.kind.unwrap_or_else(|| "info".to_string()),
                title: n.title,
                message: n.message,
                duration_ms: n.duration.unwrap_or(DEFAULT_DURATION_MS),
            })
            .collect(),
    })
}
