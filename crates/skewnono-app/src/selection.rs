//! Selection state container
//!
//! Holds the user's fab and tool choices, writes them through to durable
//! storage on every change, and restores them when constructed.
//!
//! Mutations never fail from the caller's point of view: storage write and
//! removal errors are logged and the in-memory change stands. The only
//! named failure is a malformed persisted record at load time, which is
//! logged and treated as "no prior selection".

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use skewnono_core::prelude::*;
use skewnono_core::{iso_timestamp, Fab, Tool};

use crate::storage::KeyValueStore;

/// Storage key the selection record lives under
pub const STORAGE_KEY: &str = "skewnono-selection";

/// Record written to storage on every selection change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fab: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tool: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub timestamp: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Current fab/tool pair as shown to the view layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub fab: String,
    pub tool: String,
}

/// Owner of the fab/tool selection
pub struct SelectionStore {
    storage: Box<dyn KeyValueStore>,
    selected_fab: String,
    selected_tool: String,
    clock: fn() -> DateTime<Utc>,
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selected_fab", &self.selected_fab)
            .field("selected_tool", &self.selected_tool)
            .finish_non_exhaustive()
    }
}

impl SelectionStore {
    /// Create the store and restore any persisted selection
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self::with_clock(storage, Utc::now)
    }

    /// Create the store with a custom timestamp source
    pub fn with_clock(storage: Box<dyn KeyValueStore>, clock: fn() -> DateTime<Utc>) -> Self {
        let mut store = Self {
            storage,
            selected_fab: String::new(),
            selected_tool: String::new(),
            clock,
        };
        store.load_from_local_storage();
        store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn selected_fab(&self) -> &str {
        &self.selected_fab
    }

    pub fn selected_tool(&self) -> &str {
        &self.selected_tool
    }

    pub fn fab_options(&self) -> &'static [Fab] {
        &Fab::ALL
    }

    pub fn tool_options(&self) -> &'static [Tool] {
        &Tool::ALL
    }

    /// Both a fab and a tool have been chosen
    pub fn is_complete(&self) -> bool {
        !self.selected_fab.is_empty() && !self.selected_tool.is_empty()
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            fab: self.selected_fab.clone(),
            tool: self.selected_tool.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the fab and persist. Any string is accepted.
    pub fn select_fab(&mut self, fab: impl Into<String>) {
        self.selected_fab = fab.into();
        debug!("Selected fab '{}'", self.selected_fab);
        self.save_to_local_storage();
    }

    /// Set the tool and persist. Any string is accepted.
    pub fn select_tool(&mut self, tool: impl Into<String>) {
        self.selected_tool = tool.into();
        debug!("Selected tool '{}'", self.selected_tool);
        self.save_to_local_storage();
    }

    /// Set the fab only if it is one of the known fabs
    pub fn try_select_fab(&mut self, fab: &str) -> Result<Fab> {
        let parsed: Fab = fab.parse()?;
        self.select_fab(parsed.as_str());
        Ok(parsed)
    }

    /// Set the tool only if it is one of the known tools
    pub fn try_select_tool(&mut self, tool: &str) -> Result<Tool> {
        let parsed: Tool = tool.parse()?;
        self.select_tool(parsed.as_str());
        Ok(parsed)
    }

    /// Reset both fields and delete the persisted record
    pub fn clear_selection(&mut self) {
        self.selected_fab.clear();
        self.selected_tool.clear();

        if let Err(e) = self.storage.remove(STORAGE_KEY) {
            warn!("Failed to remove persisted selection: {}", e);
        } else {
            info!("Selection cleared");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Write the full record (fab, tool, now) under [`STORAGE_KEY`]
    pub fn save_to_local_storage(&mut self) {
        let record = PersistedRecord {
            fab: self.selected_fab.clone(),
            tool: self.selected_tool.clone(),
            timestamp: iso_timestamp((self.clock)()),
        };

        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize selection: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(STORAGE_KEY, &json) {
            warn!("Failed to persist selection: {}", e);
        }
    }

    /// Restore fab and tool from the persisted record
    ///
    /// Leaves the current state untouched when there is no record or the
    /// record cannot be parsed.
    pub fn load_from_local_storage(&mut self) {
        match self.persisted_record() {
            Ok(Some(record)) => {
                info!(
                    "Restored selection fab='{}' tool='{}' (saved {})",
                    record.fab, record.tool, record.timestamp
                );
                self.selected_fab = record.fab;
                self.selected_tool = record.tool;
            }
            Ok(None) => debug!("No persisted selection"),
            Err(e) => error!("Ignoring persisted selection: {}", e),
        }
    }

    /// Read and parse the persisted record without touching in-memory state
    ///
    /// A storage read failure counts as "no record".
    pub fn persisted_record(&self) -> Result<Option<PersistedRecord>> {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!("Failed to read persisted selection: {}", e);
                return Ok(None);
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| Error::malformed_record(STORAGE_KEY, e.to_string()))
    }
}
