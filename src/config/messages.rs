//! Message templates for user-facing text
//!
//! All user-visible strings are defined here for easy customization.

use crate::error::{PhishscanError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Status messages shown while a scan is in flight
#[derive(Debug, Clone, Deserialize)]
pub struct ScanMessages {
    /// Shown immediately on submission, before the first rotation.
    pub initializing: String,
    /// Cyclic status lines; advances once per rotation interval, wrapping.
    pub rotation: Vec<String>,
    /// Spinner label template for the one-shot command. `{url}` expands to
    /// the scanned URL.
    pub checking: String,
}

impl Default for ScanMessages {
    fn default() -> Self {
        Self {
            initializing: "Initializing scan…".to_string(),
            rotation: vec![
                "Scanning URL fingerprint…".to_string(),
                "Verifying digital signature…".to_string(),
                "Analyzing URL structure…".to_string(),
                "Inspecting domain history…".to_string(),
                "Cross-referencing threat models…".to_string(),
                "Finalizing AI assessment…".to_string(),
            ],
            checking: "Scanning {url}...".to_string(),
        }
    }
}

/// Verdict presentation strings
#[derive(Debug, Clone, Deserialize)]
pub struct VerdictMessages {
    pub phishing: String,
    pub safe: String,
    pub confidence_label: String,
    pub risk_label: String,
    pub disclaimer: String,
}

impl Default for VerdictMessages {
    fn default() -> Self {
        Self {
            phishing: "Phishing Detected!".to_string(),
            safe: "Safe URL".to_string(),
            confidence_label: "Confidence".to_string(),
            risk_label: "Risk".to_string(),
            disclaimer: "This AI tool is not always 100% accurate. It may make mistakes when classifying URLs.".to_string(),
        }
    }
}

/// TUI chrome strings
#[derive(Debug, Clone, Deserialize)]
pub struct UiMessages {
    pub title: String,
    pub tagline: String,
    pub input_prompt: String,
    pub input_placeholder: String,
    pub press_enter: String,
}

impl Default for UiMessages {
    fn default() -> Self {
        Self {
            title: "PhishScan".to_string(),
            tagline: "AI Phishing URL Detector".to_string(),
            input_prompt: "Enter URL to scan:".to_string(),
            input_placeholder: "https://example.com/login".to_string(),
            press_enter: "Press Enter to scan".to_string(),
        }
    }
}

/// All user-facing message templates
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Messages {
    #[serde(default)]
    pub scan: ScanMessages,
    #[serde(default)]
    pub verdict: VerdictMessages,
    #[serde(default)]
    pub ui: UiMessages,
}

impl Messages {
    /// Load messages from the default config file
    pub fn load_default() -> Result<Self> {
        let config_path = Path::new("config/messages.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load messages from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| PhishscanError::File(format!("cannot read {}", path.display())))?;

        toml::from_str(&content).map_err(|e| PhishscanError::Config(e.to_string()))
    }

    /// Format a message with placeholder substitution
    pub fn format(template: &str, vars: &HashMap<&str, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{}}}", key), value);
        }
        result
    }
}
