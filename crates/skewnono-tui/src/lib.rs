//! skewnono-tui - Terminal UI for the SkewNoNo selector
//!
//! This crate provides the ratatui-based interface over the state in
//! skewnono-app: event polling, layout, widgets and the view function.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
