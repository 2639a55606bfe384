//! Application state (Model in TEA pattern)

use skewnono_core::{AppPhase, Fab, Tool};

use crate::config::Settings;
use crate::route::Route;
use crate::selection::SelectionStore;

/// Number of ticks a notice stays on screen (~3s at 50ms polling)
pub const NOTICE_TICKS: u16 = 60;

/// Focusable panels on the selector screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Fab,
    Tool,
    Actions,
}

impl Panel {
    pub fn next(self) -> Self {
        match self {
            Panel::Fab => Panel::Tool,
            Panel::Tool => Panel::Actions,
            Panel::Actions => Panel::Fab,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Panel::Fab => Panel::Actions,
            Panel::Tool => Panel::Fab,
            Panel::Actions => Panel::Tool,
        }
    }
}

/// Buttons on the selector's actions row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorAction {
    Start,
    Clear,
}

impl SelectorAction {
    pub const ALL: [SelectorAction; 2] = [SelectorAction::Start, SelectorAction::Clear];

    pub fn label(&self) -> &'static str {
        match self {
            SelectorAction::Start => "Start",
            SelectorAction::Clear => "Clear",
        }
    }
}

/// Severity of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

/// Short message shown in the footer until it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub ticks_remaining: u16,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
            ticks_remaining: NOTICE_TICKS,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
            ticks_remaining: NOTICE_TICKS,
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Fab/tool selection with write-through persistence
    pub selection: SelectionStore,

    /// Currently displayed screen
    pub route: Route,

    /// Focused panel on the selector screen
    pub focus: Panel,

    /// Highlighted position in the fab list
    pub fab_cursor: usize,

    /// Highlighted position in the tool list
    pub tool_cursor: usize,

    /// Highlighted button on the actions row
    pub action_cursor: usize,

    /// Transient footer message
    pub notice: Option<Notice>,

    /// Application phase
    pub phase: AppPhase,

    /// Loaded settings
    pub settings: Settings,
}

impl AppState {
    pub fn new(selection: SelectionStore) -> Self {
        Self::with_settings(selection, Settings::default())
    }

    /// Create state and open the configured initial route
    pub fn with_settings(selection: SelectionStore, settings: Settings) -> Self {
        let initial_route = Route::from_path(&settings.ui.initial_route);

        let mut state = Self {
            selection,
            route: Route::Selector,
            focus: Panel::Fab,
            fab_cursor: 0,
            tool_cursor: 0,
            action_cursor: 0,
            notice: None,
            phase: AppPhase::Running,
            settings,
        };
        state.sync_cursors();

        if state.can_enter(initial_route) {
            state.route = initial_route;
        }

        state
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Whether a route may be shown for the current selection
    pub fn can_enter(&self, route: Route) -> bool {
        match route {
            Route::Selector => true,
            Route::Main => self.selection.is_complete(),
        }
    }

    /// Move list cursors onto the current selections
    ///
    /// Unknown or empty values leave the cursor where it is.
    pub fn sync_cursors(&mut self) {
        if let Some(idx) = Fab::ALL
            .iter()
            .position(|fab| fab.as_str() == self.selection.selected_fab())
        {
            self.fab_cursor = idx;
        }
        if let Some(idx) = Tool::ALL
            .iter()
            .position(|tool| tool.as_str() == self.selection.selected_tool())
        {
            self.tool_cursor = idx;
        }
    }

    pub fn highlighted_fab(&self) -> Fab {
        Fab::ALL[self.fab_cursor.min(Fab::ALL.len() - 1)]
    }

    pub fn highlighted_tool(&self) -> Tool {
        Tool::ALL[self.tool_cursor.min(Tool::ALL.len() - 1)]
    }

    pub fn highlighted_action(&self) -> SelectorAction {
        SelectorAction::ALL[self.action_cursor.min(SelectorAction::ALL.len() - 1)]
    }

    /// Number of entries in the focused panel
    pub fn focused_len(&self) -> usize {
        match self.focus {
            Panel::Fab => Fab::ALL.len(),
            Panel::Tool => Tool::ALL.len(),
            Panel::Actions => SelectorAction::ALL.len(),
        }
    }

    /// Cursor of the focused panel
    pub fn focused_cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Panel::Fab => &mut self.fab_cursor,
            Panel::Tool => &mut self.tool_cursor,
            Panel::Actions => &mut self.action_cursor,
        }
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Count down the notice and drop it once expired
    pub fn tick_notice(&mut self) {
        if let Some(notice) = self.notice.as_mut() {
            notice.ticks_remaining = notice.ticks_remaining.saturating_sub(1);
            if notice.ticks_remaining == 0 {
                self.notice = None;
            }
        }
    }
}
