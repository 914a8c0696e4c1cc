//! Application settings configuration
//!
//! Endpoint address and the timing constants behind the scan animation.

use crate::error::{PhishscanError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Scan behavior settings
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSettings {
    /// How long a successful result is held back so the scanning animation
    /// stays visible. Zero disables the hold.
    #[serde(default = "default_min_display_ms")]
    pub min_display_ms: u64,
    /// Interval between status-message rotations while scanning.
    #[serde(default = "default_message_interval_ms")]
    pub message_interval_ms: u64,
    /// Request timeout in seconds. Unset means the transport default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_min_display_ms() -> u64 {
    3500
}

fn default_message_interval_ms() -> u64 {
    900
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            min_display_ms: default_min_display_ms(),
            message_interval_ms: default_message_interval_ms(),
            request_timeout_secs: None,
        }
    }
}

impl ScanSettings {
    pub fn min_display(&self) -> Duration {
        Duration::from_millis(self.min_display_ms)
    }

    pub fn message_interval(&self) -> Duration {
        Duration::from_millis(self.message_interval_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// TUI timing settings
#[derive(Debug, Clone, Deserialize)]
pub struct UiSettings {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Interval between matrix-rain steps; independent of the scan timers.
    #[serde(default = "default_rain_interval_ms")]
    pub rain_interval_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_rain_interval_ms() -> u64 {
    55
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            rain_interval_ms: default_rain_interval_ms(),
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn rain_interval(&self) -> Duration {
        Duration::from_millis(self.rain_interval_ms)
    }
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Prediction service address.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub scan: ScanSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8000/predict".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            scan: ScanSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self> {
        let config_path = Path::new("config/settings.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| PhishscanError::File(format!("cannot read {}", path.display())))?;

        toml::from_str(&content).map_err(|e| PhishscanError::Config(e.to_string()))
    }
}
