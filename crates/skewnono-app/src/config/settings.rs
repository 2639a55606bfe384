//! Settings parser for skewnono/config.toml

use super::types::Settings;
use skewnono_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "skewnono";
const STORAGE_DIR: &str = "storage";

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

/// Default config file location (`~/.config/skewnono/config.toml` on Linux)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Default storage directory (`~/.local/share/skewnono/storage` on Linux)
pub fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(STORAGE_DIR)
}

/// Storage directory to use: explicit override, then settings, then default
pub fn resolve_storage_dir(settings: &Settings, override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    match settings.storage.dir.as_deref() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => default_storage_dir(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from a config file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(())
}

fn generate_default_config() -> String {
    r#"# SkewNoNo Selector Configuration

[storage]
# Directory holding the persisted selection (leave unset for the platform data dir)
# dir = "/path/to/storage"

[behavior]
strict_selection = false   # Reject unknown fab/tool codes on the command line

[ui]
show_key_hints = true
initial_route = "/"        # "/" = selector, "/main" = main screen when a selection is complete
"#
    .to_string()
}
