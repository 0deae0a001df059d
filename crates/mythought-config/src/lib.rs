//! Configuration and file management for the MyThought showcase
//!
//! This crate provides:
//! - File path utilities for config, cache and data files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - The persisted UI-state snapshot and its storage backends
//! - Migration of unversioned snapshots written by older builds

pub mod app_config;
pub mod config_file;
pub mod migrate;
pub mod paths;
pub mod snapshot;

pub use app_config::{AppConfig, MarqueeConfig, RevealConfig};
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir, data_dir, snapshot_path};
pub use snapshot::{
    load_snapshot, save_snapshot, FileStorage, MemoryStorage, PersistedState, SnapshotError,
    SnapshotStorage, StoredNotification, StoredStats, CURRENT_VERSION,
};
