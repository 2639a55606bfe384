//! Configuration types for the SkewNoNo selector
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Section structs (`StorageSettings`, `BehaviorSettings`, `UiSettings`)

use serde::Deserialize;
use std::path::PathBuf;

/// Global settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the selection record is kept
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StorageSettings {
    /// Storage directory (empty = platform data dir)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BehaviorSettings {
    /// Reject fab/tool codes outside the known lists on the command line
    #[serde(default)]
    pub strict_selection: bool,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiSettings {
    /// Show the key hint line in the footer
    #[serde(default = "default_true")]
    pub show_key_hints: bool,

    /// Route to open on startup ("/" or "/main")
    #[serde(default = "default_initial_route")]
    pub initial_route: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
            initial_route: default_initial_route(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_initial_route() -> String {
    "/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.storage.dir.is_none());
        assert!(!settings.behavior.strict_selection);
        assert!(settings.ui.show_key_hints);
        assert_eq!(settings.ui.initial_route, "/");
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let toml = r#"
[behavior]
strict_selection = true
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert!(settings.behavior.strict_selection);
        assert!(settings.ui.show_key_hints);
        assert!(settings.storage.dir.is_none());
    }

    #[test]
    fn test_settings_deserialize_full() {
        let toml = r#"
[storage]
dir = "/var/lib/skewnono"

[behavior]
strict_selection = false

[ui]
show_key_hints = false
initial_route = "/main"
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(
            settings.storage.dir,
            Some(PathBuf::from("/var/lib/skewnono"))
        );
        assert!(!settings.ui.show_key_hints);
        assert_eq!(settings.ui.initial_route, "/main");
    }

    #[test]
    fn test_empty_document_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
