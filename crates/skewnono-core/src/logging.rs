//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding a full filter directive
pub const LOG_ENV_VAR: &str = "SKEWNONO_LOG";

/// Plain level (`DEBUG`, `info`, ...) used when `SKEWNONO_LOG` is unset
pub const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// `json` switches the file output to one JSON object per line
pub const LOG_FORMAT_ENV_VAR: &str = "SKEWNONO_LOG_FORMAT";

const DEFAULT_FILTER: &str = "skewnono=info,warn";

/// Number of daily log files kept before the oldest is deleted
const MAX_LOG_FILES: usize = 30;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Line format of the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Anything other than `json` (any case) is text
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Build the filter directive from `SKEWNONO_LOG` and `LOG_LEVEL` values
///
/// A non-empty `SKEWNONO_LOG` wins. Otherwise a recognised `LOG_LEVEL`
/// sets the level for our crates. Unknown levels fall back to the default.
pub fn filter_directive(skewnono_log: Option<&str>, log_level: Option<&str>) -> String {
    if let Some(directive) = skewnono_log.map(str::trim).filter(|d| !d.is_empty()) {
        return directive.to_string();
    }

    let level = log_level.map(|l| l.trim().to_ascii_lowercase());
    let level = match level.as_deref() {
        Some(l @ ("trace" | "debug" | "info" | "warn" | "error")) => l,
        Some("warning") => "warn",
        Some("critical") => "error",
        _ => return DEFAULT_FILTER.to_string(),
    };
    format!("skewnono={level},warn")
}

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/skewnono/logs/` (platform data dir).
///
/// # Examples
/// ```bash
/// SKEWNONO_LOG=debug skewnono
/// LOG_LEVEL=DEBUG SKEWNONO_LOG_FORMAT=json skewnono show
/// ```
pub fn init() -> Result<()> {
    let format = LogFormat::from_env_value(std::env::var(LOG_FORMAT_ENV_VAR).ok().as_deref());
    init_in(&log_directory(), format)
}

/// Initialize logging into an explicit directory
pub fn init_in(log_dir: &Path, format: LogFormat) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("skewnono")
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)
        .map_err(|e| Error::logging(e.to_string()))?;

    let directive = filter_directive(
        std::env::var(LOG_ENV_VAR).ok().as_deref(),
        std::env::var(LOG_LEVEL_ENV_VAR).ok().as_deref(),
    );
    let env_filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let timer = || fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string());

    // Exactly one of the two layers is present
    let (text_layer, json_layer) = match format {
        LogFormat::Text => (
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(timer()),
            ),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file_appender)
                    .with_current_span(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(timer()),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::info!(
        pid = std::process::id(),
        log_dir = %log_dir.display(),
        format = ?format,
        filter = %directive,
        "SkewNoNo logger initialized"
    );

    Ok(())
}

/// Get the log directory path
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("skewnono").join("logs")
}
