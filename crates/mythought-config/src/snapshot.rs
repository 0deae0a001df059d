//! Persisted UI state
//!
//! The theme preference, the demo counter with its statistics and the
//! notification list survive restarts as one JSON blob stored under a
//! single key (the storage namespace).
//!
//! ```json
//! {
//!   "version": 1,
//!   "saved_at": "2026-10-16T09:00:00Z",
//!   "state": { "theme": "dark", "counter": 3, "stats": { .. }, "notifications": [ .. ] }
//! }
//! ```
//!
//! Loading never fails: an absent, unreadable, malformed or too-new blob
//! yields [`PersistedState::default`].

use chrono::{DateTime, Utc};
use mythought_theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::migrate;

/// Layout version written by this build
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot is not valid JSON for its version: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u64, supported: u32 },
    #[error("snapshot is inconsistent: {0}")]
    Invalid(String),
}

/// Counter statistics as stored on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredStats {
    pub total_clicks: u64,
    pub max_value: i64,
    pub min_value: i64,
    pub current_value: i64,
}

/// A notification as stored on disk
///
/// `kind` is kept as free text so that a blob written by a build with more
/// notification kinds still loads; the application maps unknown kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredNotification {
    pub id: String,
    pub kind: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub duration_ms: u64,
}

/// The persisted slice of the application state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub counter: i64,
    #[serde(default)]
    pub stats: StoredStats,
    #[serde(default)]
    pub notifications: Vec<StoredNotification>,
}

impl PersistedState {
    fn validate(self) -> Result<Self, SnapshotError> {
        let invalid = |reason: String| Err(SnapshotError::Invalid(reason));

        if self.counter < 0 {
            return invalid(format!("counter {} is below zero", self.counter));
        }
        if self.counter == i64::MAX
            || self.stats.max_value == i64::MAX
            || self.stats.current_value == i64::MAX
            || self.stats.total_clicks == u64::MAX
        {
            return invalid("counter or stats cannot be incremented any further".to_string());
        }
        if self.stats.max_value < self.counter {
            return invalid(format!(
                "max value {} is below counter {}",
                self.stats.max_value, self.counter
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotBlob {
    version: u32,
    saved_at: DateTime<Utc>,
    state: PersistedState,
}

/// Key/value style storage holding exactly one snapshot blob
pub trait SnapshotStorage: Send {
    /// Read the blob, `Ok(None)` if nothing was stored yet
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the blob
    fn write(&self, blob: &str) -> io::Result<()>;
}

/// Snapshot stored as a JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File storage at the standard data location for `namespace`
    pub fn for_namespace(namespace: &str) -> anyhow::Result<Self> {
        Ok(Self::new(crate::paths::snapshot_path(namespace)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for FileStorage {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, blob: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write-then-rename so a crash never leaves a half-written blob behind
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &self.path)
    }
}

/// In-memory storage, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with `blob`
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self) -> io::Result<Option<String>> {
        let guard = self
            .blob
            .lock()
            .map_err(|_| io::Error::other("memory storage lock poisoned"))?;
        Ok(guard.clone())
    }

    fn write(&self, blob: &str) -> io::Result<()> {
        let mut guard = self
            .blob
            .lock()
            .map_err(|_| io::Error::other("memory storage lock poisoned"))?;
        *guard = Some(blob.to_string());
        Ok(())
    }
}

/// Decode a blob of any known version into the current layout
pub fn decode(blob: &str) -> Result<PersistedState, SnapshotError> {
    let value: serde_json::Value = serde_json::from_str(blob)?;
    let version = value.get("version").and_then(serde_json::Value::as_u64);

    let state = match version {
        None | Some(0) => migrate::from_legacy(value)?,
        Some(v) if v == u64::from(CURRENT_VERSION) => {
            serde_json::from_value::<SnapshotBlob>(value)?.state
        }
        Some(found) => {
            return Err(SnapshotError::UnsupportedVersion {
                found,
                supported: CURRENT_VERSION,
            })
        }
    };

    state.validate()
}

/// Encode the state in the current layout
pub fn encode(state: &PersistedState) -> Result<String, SnapshotError> {
    let blob = SnapshotBlob {
        version: CURRENT_VERSION,
        saved_at: Utc::now(),
        state: state.clone(),
    };
    Ok(serde_json::to_string_pretty(&blob)?)
}

/// Load the persisted state, falling back to defaults on any problem
pub fn load_snapshot(storage: &dyn SnapshotStorage) -> PersistedState {
    match storage.read() {
        Ok(Some(blob)) => match decode(&blob) {
            Ok(state) => {
                log::info!(
                    "Restored UI state (theme={}, counter={}, {} notifications)",
                    state.theme,
                    state.counter,
                    state.notifications.len()
                );
                state
            }
            Err(e) => {
                log::warn!("Ignoring persisted UI state: {}", e);
                PersistedState::default()
            }
        },
        Ok(None) => {
            log::info!("No persisted UI state found, using defaults");
            PersistedState::default()
        }
        Err(e) => {
            log::warn!("Failed to read persisted UI state: {}", e);
            PersistedState::default()
        }
    }
}

/// Persist the state in the current layout
pub fn save_snapshot(
    storage: &dyn SnapshotStorage,
    state: &PersistedState,
) -> Result<(), SnapshotError> {
    let blob = encode(state)?;
    storage.write(&blob)?;
    log::debug!("Saved UI state (counter={})", state.counter);
    Ok(())
}
