//! Theme configuration for CLI display
//!
//! Icons used by the one-shot and batch output.

use crate::error::{PhishscanError, Result};
use serde::Deserialize;
use std::path::Path;

/// Status icons
#[derive(Debug, Clone, Deserialize)]
pub struct Icons {
    pub pass: String,
    pub warning: String,
    pub bullet: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            pass: "✓".to_string(),
            warning: "⚠".to_string(),
            bullet: "•".to_string(),
        }
    }
}

/// Display theme
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub icons: Icons,
}

impl Theme {
    /// Load theme from the default config file
    pub fn load_default() -> Result<Self> {
        let config_path = Path::new("config/theme.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load theme from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| PhishscanError::File(format!("cannot read {}", path.display())))?;

        toml::from_str(&content).map_err(|e| PhishscanError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_icons() {
        let theme = Theme::default();
        assert_eq!(theme.icons.pass, "✓");
        assert_eq!(theme.icons.warning, "⚠");
    }

    #[test]
    fn test_toml_override() {
        let theme: Theme = toml::from_str(
            r#"
            [icons]
            pass = "+"
            warning = "!"
            bullet = "*"
            "#,
        )
        .unwrap();
        assert_eq!(theme.icons.pass, "+");
        assert_eq!(theme.icons.bullet, "*");
    }
}
