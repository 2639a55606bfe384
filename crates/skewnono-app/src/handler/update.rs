//! Main update function - handles state transitions (TEA pattern)

use skewnono_core::prelude::*;
use skewnono_core::{AppPhase, Fab};

use crate::message::Message;
use crate::route::Route;
use crate::state::{AppState, Notice, Panel, SelectorAction};

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_notice();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectFab(fab) => {
            state.selection.select_fab(fab);
            state.sync_cursors();
            announce_if_complete(state);
            UpdateResult::none()
        }

        Message::SelectTool(tool) => {
            state.selection.select_tool(tool);
            state.sync_cursors();
            announce_if_complete(state);
            UpdateResult::none()
        }

        Message::QuickSelectFab(index) => match Fab::ALL.get(index) {
            Some(fab) => {
                state.focus = Panel::Fab;
                state.fab_cursor = index;
                UpdateResult::message(Message::SelectFab(fab.as_str().to_string()))
            }
            None => UpdateResult::none(),
        },

        Message::ClearSelection => {
            state.selection.clear_selection();
            state.fab_cursor = 0;
            state.tool_cursor = 0;
            state.focus = Panel::Fab;
            if state.route == Route::Main {
                state.route = Route::Selector;
            }
            state.set_notice(Notice::info("Selection cleared"));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selector Navigation
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }

        Message::CursorUp => {
            let cursor = state.focused_cursor_mut();
            *cursor = cursor.saturating_sub(1);
            UpdateResult::none()
        }

        Message::CursorDown => {
            let max = state.focused_len().saturating_sub(1);
            let cursor = state.focused_cursor_mut();
            if *cursor < max {
                *cursor += 1;
            }
            UpdateResult::none()
        }

        Message::ActivateHighlighted => match state.focus {
            Panel::Fab => {
                let fab = state.highlighted_fab();
                // Move on to the tool panel while no tool is chosen yet
                if state.selection.selected_tool().is_empty() {
                    state.focus = Panel::Tool;
                }
                UpdateResult::message(Message::SelectFab(fab.as_str().to_string()))
            }
            Panel::Tool => {
                let tool = state.highlighted_tool();
                state.focus = Panel::Actions;
                state.action_cursor = 0;
                UpdateResult::message(Message::SelectTool(tool.as_str().to_string()))
            }
            Panel::Actions => match state.highlighted_action() {
                SelectorAction::Start => UpdateResult::message(Message::Start),
                SelectorAction::Clear => UpdateResult::message(Message::ClearSelection),
            },
        },

        // ─────────────────────────────────────────────────────────
        // Routing
        // ─────────────────────────────────────────────────────────
        Message::Start => {
            if state.selection.is_complete() {
                UpdateResult::message(Message::Navigate(Route::Main))
            } else {
                state.set_notice(Notice::warning("Select a fab and a tool first"));
                UpdateResult::none()
            }
        }

        Message::Back => UpdateResult::message(Message::Navigate(Route::Selector)),

        Message::Navigate(route) => {
            if state.can_enter(route) {
                if state.route != route {
                    info!("Navigating {} -> {}", state.route, route);
                    state.route = route;
                }
            } else {
                warn!("Refusing navigation to {} with incomplete selection", route);
                state.set_notice(Notice::warning("Select a fab and a tool first"));
            }
            UpdateResult::none()
        }
    }
}

fn announce_if_complete(state: &mut AppState) {
    if state.selection.is_complete() {
        let summary = state.selection.summary();
        state.set_notice(Notice::info(format!(
            "{} / {} ready - press s to start",
            summary.fab, summary.tool
        )));
    }
}
