//! Application configuration
//!
//! Configuration loaded from `.mythought.toml`. Every key is optional.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from `.mythought.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Key under which the UI state snapshot is stored
    #[serde(default = "default_storage_namespace")]
    pub storage_namespace: String,

    /// Frame/tick interval of the event loop
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Toast lifetime when a request does not carry its own duration
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    #[serde(default)]
    pub marquee: MarqueeConfig,

    #[serde(default)]
    pub reveal: RevealConfig,
}

/// Logo marquee settings (`[marquee]` table)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Cells per second
    pub speed: f64,
    /// Speed while the pointer hovers the strip, `None` keeps `speed`
    pub hover_speed: Option<f64>,
    /// One of `left`, `right`, `up`, `down`
    pub direction: String,
    /// Gap between logos in cells
    pub gap: u16,
    pub fade: bool,
    /// Any colour ratatui can parse (`#0f172a`, `black`, `8`)
    pub fade_color: String,
    pub fade_width: u16,
    /// Layout settle delay before the strip is measured
    pub settle_ms: u64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: 12.0,
            hover_speed: Some(0.0),
            direction: "left".to_string(),
            gap: 4,
            fade: true,
            fade_color: "#0f172a".to_string(),
            fade_width: 3,
            settle_ms: 100,
        }
    }
}

/// Scroll reveal settings (`[reveal]` table)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub stagger_ms: u64,
    pub once: bool,
    /// Fraction of the viewport height at which an element triggers
    pub start: f64,
    pub duration_ms: u64,
    /// Vertical offset (rows) of the hidden state
    pub distance: u16,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".reveal-marker".to_string(),
            stagger_ms: 80,
            once: true,
            start: 0.85,
            duration_ms: 600,
            distance: 2,
        }
    }
}

fn default_storage_namespace() -> String {
    "mythought-storage".to_string()
}

fn default_tick_rate_ms() -> u64 {
    33
}

fn default_toast_duration_ms() -> u64 {
    4000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_namespace: default_storage_namespace(),
            tick_rate_ms: default_tick_rate_ms(),
            toast_duration_ms: default_toast_duration_ms(),
            marquee: MarqueeConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
