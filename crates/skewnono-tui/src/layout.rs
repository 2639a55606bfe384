//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Screen areas shared by both routes
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with route and completion status
    pub header: Rect,

    /// Route content
    pub body: Rect,

    /// Summary, notice and key hints
    pub footer: Rect,
}

/// Split the screen into header, body and footer
///
/// The footer grows by one row when key hints are shown.
pub fn create(area: Rect, show_key_hints: bool) -> ScreenAreas {
    let footer_height = if show_key_hints { 4 } else { 3 };

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(footer_height),
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        footer,
    }
}

/// Selector body areas: fab list, tool list, and actions row
#[derive(Debug, Clone, Copy)]
pub struct SelectorAreas {
    pub fabs: Rect,
    pub tools: Rect,
    pub actions: Rect,
}

/// Split the selector body into two side-by-side panels over an actions row
pub fn selector(body: Rect) -> SelectorAreas {
    let [panels, actions] =
        Layout::vertical([Constraint::Min(4), Constraint::Length(3)]).areas(body);
    let [fabs, tools] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(panels);

    SelectorAreas {
        fabs,
        tools,
        actions,
    }
}

/// Center a rectangle of at most `width` x `height` within `area`
pub fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height.min(area.height))]).flex(Flex::Center);
    let horizontal =
        Layout::horizontal([Constraint::Length(width.min(area.width))]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
