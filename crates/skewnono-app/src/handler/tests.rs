//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::route::Route;
use crate::selection::{SelectionStore, STORAGE_KEY};
use crate::state::{AppState, NoticeKind, Panel};
use crate::storage::{KeyValueStore, MemoryStore};
use skewnono_core::AppPhase;

fn test_state() -> (AppState, MemoryStore) {
    let backing = MemoryStore::new();
    let state = AppState::new(SelectionStore::new(Box::new(backing.clone())));
    (state, backing)
}

fn complete_state() -> (AppState, MemoryStore) {
    let (mut state, backing) = test_state();
    process_message(&mut state, Message::SelectFab("R3".into()));
    process_message(&mut state, Message::SelectTool("CD-SEM".into()));
    (state, backing)
}

fn press(state: &mut AppState, key: InputKey) {
    process_message(state, Message::Key(key));
}

// ─────────────────────────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let (mut state, _) = test_state();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_quits_on_both_routes() {
    let (mut state, _) = complete_state();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));

    state.route = Route::Main;
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

#[test]
fn test_escape_quits_selector_but_goes_back_from_main() {
    let (mut state, _) = complete_state();
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));

    state.route = Route::Main;
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Back));
}

#[test]
fn test_unmapped_key_produces_nothing() {
    let (state, _) = test_state();
    assert_eq!(handle_key(&state, InputKey::Char('z')), None);
}

#[test]
fn test_key_message_returns_follow_up() {
    let (mut state, _) = test_state();
    let result = update(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(result, UpdateResult::message(Message::FocusNext));

    let result = update(&mut state, Message::Key(InputKey::Char('x')));
    assert_eq!(result, UpdateResult::none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_select_fab_message_updates_store_and_cursor() {
    let (mut state, backing) = test_state();

    update(&mut state, Message::SelectFab("M11".into()));

    assert_eq!(state.selection.selected_fab(), "M11");
    assert_eq!(state.fab_cursor, 4);
    assert!(backing.contains(STORAGE_KEY));
}

#[test]
fn test_completing_selection_sets_ready_notice() {
    let (state, _) = complete_state();
    let notice = state.notice.as_ref().expect("notice set");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert!(notice.text.contains("R3 / CD-SEM"));
}

#[test]
fn test_enter_on_fab_selects_and_moves_to_tool_panel() {
    let (mut state, _) = test_state();

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.selection.selected_fab(), "M16");
    assert_eq!(state.focus, Panel::Tool);
}

#[test]
fn test_enter_on_fab_keeps_focus_when_tool_already_chosen() {
    let (mut state, _) = complete_state();
    state.focus = Panel::Fab;

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Char(' '));

    assert_eq!(state.selection.selected_fab(), "M16");
    assert_eq!(state.focus, Panel::Fab);
}

#[test]
fn test_enter_on_tool_selects_and_focuses_start() {
    let (mut state, _) = test_state();
    state.focus = Panel::Tool;

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.selection.selected_tool(), "HV-SEM");
    assert_eq!(state.focus, Panel::Actions);
    assert_eq!(state.action_cursor, 0);
}

#[test]
fn test_quick_select_fab_by_digit() {
    let (mut state, _) = test_state();
    state.focus = Panel::Tool;

    press(&mut state, InputKey::Char('6'));

    assert_eq!(state.selection.selected_fab(), "M10");
    assert_eq!(state.fab_cursor, 5);
    assert_eq!(state.focus, Panel::Fab);
}

#[test]
fn test_quick_select_out_of_range_ignored() {
    let (mut state, backing) = test_state();

    press(&mut state, InputKey::Char('9'));

    assert_eq!(state.selection.selected_fab(), "");
    assert!(backing.is_empty());
}

#[test]
fn test_clear_key_resets_selection_and_storage() {
    let (mut state, backing) = complete_state();
    state.focus = Panel::Actions;

    press(&mut state, InputKey::Char('c'));

    assert_eq!(state.selection.summary().fab, "");
    assert_eq!(state.selection.summary().tool, "");
    assert!(!state.selection.is_complete());
    assert!(!backing.contains(STORAGE_KEY));
    assert_eq!(state.focus, Panel::Fab);
    assert_eq!(state.notice.as_ref().unwrap().text, "Selection cleared");
}

#[test]
fn test_clear_button_on_actions_row() {
    let (mut state, backing) = complete_state();
    state.focus = Panel::Actions;

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    assert!(!state.selection.is_complete());
    assert!(backing.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Cursor & Focus
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_cursor_clamps_to_panel_bounds() {
    let (mut state, _) = test_state();

    press(&mut state, InputKey::Up);
    assert_eq!(state.fab_cursor, 0);

    for _ in 0..10 {
        press(&mut state, InputKey::Char('j'));
    }
    assert_eq!(state.fab_cursor, 5);

    state.focus = Panel::Tool;
    for _ in 0..10 {
        press(&mut state, InputKey::Down);
    }
    assert_eq!(state.tool_cursor, 1);
}

#[test]
fn test_tab_cycles_focus() {
    let (mut state, _) = test_state();

    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Panel::Tool);
    press(&mut state, InputKey::Right);
    assert_eq!(state.focus, Panel::Actions);
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Panel::Fab);
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.focus, Panel::Actions);
    press(&mut state, InputKey::Char('h'));
    assert_eq!(state.focus, Panel::Tool);
}

#[test]
fn test_horizontal_keys_switch_panel_without_moving_cursor() {
    let (mut state, _) = test_state();

    press(&mut state, InputKey::Right);
    assert_eq!(state.focus, Panel::Tool);
    assert_eq!(state.fab_cursor, 0);
    assert_eq!(state.tool_cursor, 0);

    press(&mut state, InputKey::Char('l'));
    assert_eq!(state.focus, Panel::Actions);
    assert_eq!(state.action_cursor, 0);

    press(&mut state, InputKey::Left);
    press(&mut state, InputKey::Char('h'));
    assert_eq!(state.focus, Panel::Fab);
    assert_eq!(state.fab_cursor, 0);
}

#[test]
fn test_vertical_keys_move_cursor_without_switching_panel() {
    let (mut state, _) = test_state();

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Char('j'));
    assert_eq!(state.focus, Panel::Fab);
    assert_eq!(state.fab_cursor, 2);

    press(&mut state, InputKey::Char('k'));
    press(&mut state, InputKey::Up);
    assert_eq!(state.focus, Panel::Fab);
    assert_eq!(state.fab_cursor, 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Routing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_start_incomplete_stays_on_selector() {
    let (mut state, _) = test_state();
    process_message(&mut state, Message::SelectFab("R3".into()));

    press(&mut state, InputKey::Char('s'));

    assert_eq!(state.route, Route::Selector);
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Warning);
}

#[test]
fn test_start_complete_navigates_to_main() {
    let (mut state, _) = complete_state();

    press(&mut state, InputKey::Char('s'));

    assert_eq!(state.route, Route::Main);
}

#[test]
fn test_start_button_navigates_to_main() {
    let (mut state, _) = complete_state();
    state.focus = Panel::Actions;
    state.action_cursor = 0;

    press(&mut state, InputKey::Enter);

    assert_eq!(state.route, Route::Main);
}

#[test]
fn test_back_returns_to_selector() {
    let (mut state, _) = complete_state();
    process_message(&mut state, Message::Start);
    assert_eq!(state.route, Route::Main);

    press(&mut state, InputKey::Char('b'));

    assert_eq!(state.route, Route::Selector);
    // Navigation never touches the selection
    assert!(state.selection.is_complete());
}

#[test]
fn test_navigate_to_main_refused_when_incomplete() {
    let (mut state, _) = test_state();

    update(&mut state, Message::Navigate(Route::Main));

    assert_eq!(state.route, Route::Selector);
    assert!(state.notice.is_some());
}

#[test]
fn test_clear_on_main_returns_to_selector() {
    let (mut state, _) = complete_state();
    process_message(&mut state, Message::Start);

    process_message(&mut state, Message::ClearSelection);

    assert_eq!(state.route, Route::Selector);
}

#[test]
fn test_selector_keys_ignored_on_main() {
    let (mut state, _) = complete_state();
    process_message(&mut state, Message::Start);

    assert_eq!(handle_key(&state, InputKey::Char('c')), None);
    assert_eq!(handle_key(&state, InputKey::Char('1')), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Persistence through the update loop
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_keyboard_selection_survives_restart() {
    let (mut state, backing) = test_state();

    press(&mut state, InputKey::Char('3'));
    state.focus = Panel::Tool;
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    let restarted = AppState::new(SelectionStore::new(Box::new(backing.clone())));
    assert_eq!(restarted.selection.selected_fab(), "M15");
    assert_eq!(restarted.selection.selected_tool(), "HV-SEM");
    assert_eq!(restarted.fab_cursor, 2);
    assert_eq!(restarted.tool_cursor, 1);
}

#[test]
fn test_tick_expires_notice() {
    let (mut state, _) = complete_state();
    assert!(state.notice.is_some());

    for _ in 0..crate::state::NOTICE_TICKS {
        update(&mut state, Message::Tick);
    }

    assert!(state.notice.is_none());
}

#[test]
fn test_corrupt_record_starts_empty() {
    let mut backing = MemoryStore::new();
    backing.set(STORAGE_KEY, "{\"fab\": ").unwrap();

    let state = AppState::new(SelectionStore::new(Box::new(backing)));

    assert_eq!(state.selection.selected_fab(), "");
    assert_eq!(state.route, Route::Selector);
}
