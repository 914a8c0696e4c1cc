//! Configuration module for phishscan
//!
//! Handles loading and managing configuration from TOML files.

pub mod messages;
pub mod settings;
pub mod theme;

pub use messages::{Messages, ScanMessages, UiMessages, VerdictMessages};
pub use settings::{ScanSettings, Settings, UiSettings};
pub use theme::{Icons, Theme};

use crate::error::Result;

/// Load all configuration from default paths
pub fn load_default_config() -> Result<(Settings, Theme, Messages)> {
    let settings = Settings::load_default()?;
    let theme = Theme::load_default()?;
    let messages = Messages::load_default()?;
    Ok((settings, theme, messages))
}
