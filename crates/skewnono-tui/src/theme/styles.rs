//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use skewnono_app::state::NoticeKind;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn title() -> Style {
    Style::default()
        .fg(palette::PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---

/// Cursor row inside the focused panel
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Cursor row inside an unfocused panel
pub fn unfocused_selected() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::BORDER_DIM)
}

/// The option currently chosen in the store
pub fn chosen() -> Style {
    Style::default()
        .fg(palette::SECONDARY)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn completion(complete: bool) -> Style {
    if complete {
        Style::default().fg(palette::STATUS_GREEN)
    } else {
        text_muted()
    }
}

pub fn notice(kind: NoticeKind) -> Style {
    match kind {
        NoticeKind::Info => Style::default().fg(palette::SECONDARY),
        NoticeKind::Warning => Style::default()
            .fg(palette::STATUS_YELLOW)
            .add_modifier(Modifier::BOLD),
    }
}

// --- Block builders ---

/// Rounded card with an accent border when focused
pub fn card_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
        .padding(Padding::horizontal(1))
}
