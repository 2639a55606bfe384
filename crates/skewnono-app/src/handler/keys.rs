//! Key event handlers for each route

use crate::input_key::InputKey;
use crate::message::Message;
use crate::route::Route;
use crate::state::AppState;

/// Convert key events to messages based on the current route
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.route {
        Route::Selector => handle_key_selector(key),
        Route::Main => handle_key_main(key),
    }
}

/// Handle key events on the selector screen
fn handle_key_selector(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Panel focus
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::FocusPrevious),

        // Cursor within panel
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),

        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateHighlighted),

        // 1-9 quick select; out-of-range digits are ignored by the handler
        InputKey::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            Some(Message::QuickSelectFab(index))
        }

        InputKey::Char('c') => Some(Message::ClearSelection),
        InputKey::Char('s') => Some(Message::Start),

        _ => None,
    }
}

/// Handle key events on the main screen
fn handle_key_main(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('b') | InputKey::Esc | InputKey::Backspace => Some(Message::Back),
        _ => None,
    }
}
