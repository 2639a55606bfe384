//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::route::Route;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (notice expiry)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Choose a fab by code
    SelectFab(String),
    /// Choose a tool by code
    SelectTool(String),
    /// Choose the fab at a 0-based position in the option list
    QuickSelectFab(usize),
    /// Reset both selections and delete the stored record
    ClearSelection,

    // ─────────────────────────────────────────────────────────
    // Selector Navigation
    // ─────────────────────────────────────────────────────────
    /// Focus the next panel (Fab → Tool → Actions → Fab)
    FocusNext,
    /// Focus the previous panel
    FocusPrevious,
    /// Move the cursor up within the focused panel
    CursorUp,
    /// Move the cursor down within the focused panel
    CursorDown,
    /// Activate whatever the cursor is on in the focused panel
    ActivateHighlighted,

    // ─────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────
    /// Go to the main screen if the selection is complete
    Start,
    /// Return to the selector screen
    Back,
    /// Switch to a route directly
    Navigate(Route),
}
