//! Configuration file parsing for the SkewNoNo selector
//!
//! Supports `<config dir>/skewnono/config.toml` (or an explicit path).

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, default_storage_dir, init_config_file, load_settings,
    resolve_storage_dir,
};
pub use types::*;
