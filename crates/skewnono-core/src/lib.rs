//! # skewnono-core - Core Domain Types
//!
//! Foundation crate for the SkewNoNo selector. Provides the fab/tool domain
//! types, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Fab`] - Manufacturing fab code (R3, M16, ...)
//! - [`Tool`] - Metrology tool type (CD-SEM, HV-SEM)
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with a `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Wraps foreign errors as storage errors with context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use skewnono_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all SkewNoNo crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{iso_timestamp, AppPhase, Fab, Tool};
