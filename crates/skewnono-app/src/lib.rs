//! skewnono-app - Selection state and orchestration for the SkewNoNo selector
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the persisted fab/tool selection store, durable key-value
//! storage, routing, and configuration loading.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod route;
pub mod selection;
pub mod state;
pub mod storage;

// Re-export primary types
pub use handler::{process_message, update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use route::Route;
pub use selection::{PersistedRecord, SelectionStore, SelectionSummary, STORAGE_KEY};
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
