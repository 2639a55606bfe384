//! Headless subcommands - JSON output, no TUI
//!
//! Each command prints a single JSON object on stdout:
//!
//! ```json
//! {"fab":"M15","tool":"CD-SEM","complete":true}
//! ```

use std::io::{self, Write};

use serde::Serialize;
use skewnono_app::SelectionStore;
use skewnono_core::prelude::*;

/// Selection snapshot printed by every headless command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionReport {
    pub fab: String,
    pub tool: String,
    pub complete: bool,
}

impl SelectionReport {
    pub fn from_store(store: &SelectionStore) -> Self {
        Self {
            fab: store.selected_fab().to_string(),
            tool: store.selected_tool().to_string(),
            complete: store.is_complete(),
        }
    }
}

/// Print the restored selection
pub fn show(store: &SelectionStore) -> Result<()> {
    emit(&SelectionReport::from_store(store))
}

/// Apply the given selections and confirm they reached storage
pub fn select(
    store: &mut SelectionStore,
    fab: Option<&str>,
    tool: Option<&str>,
    strict: bool,
) -> Result<()> {
    // Validate everything before touching state so a bad tool does not
    // leave a half-applied selection behind
    if strict {
        if let Some(fab) = fab {
            fab.parse::<skewnono_core::Fab>()?;
        }
        if let Some(tool) = tool {
            tool.parse::<skewnono_core::Tool>()?;
        }
    }

    if let Some(fab) = fab {
        if strict {
            store.try_select_fab(fab)?;
        } else {
            warn_if_unknown::<skewnono_core::Fab>(fab);
            store.select_fab(fab);
        }
    }
    if let Some(tool) = tool {
        if strict {
            store.try_select_tool(tool)?;
        } else {
            warn_if_unknown::<skewnono_core::Tool>(tool);
            store.select_tool(tool);
        }
    }

    match store.persisted_record()? {
        Some(record)
            if record.fab == store.selected_fab() && record.tool == store.selected_tool() => {}
        _ => {
            return Err(Error::storage(
                "selection changed in memory but was not persisted",
            ))
        }
    }

    emit(&SelectionReport::from_store(store))
}

/// Clear the selection and confirm the record is gone
pub fn clear(store: &mut SelectionStore) -> Result<()> {
    store.clear_selection();

    if store.persisted_record().ok().flatten().is_some() {
        return Err(Error::storage("persisted selection could not be removed"));
    }

    emit(&SelectionReport::from_store(store))
}

fn warn_if_unknown<T>(value: &str)
where
    T: std::str::FromStr<Err = Error>,
{
    if let Err(e) = value.parse::<T>() {
        warn!("Accepting unknown value: {}", e);
        eprintln!("warning: {e}");
    }
}

fn emit(report: &SelectionReport) -> Result<()> {
    let json = serde_json::to_string(report)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}
