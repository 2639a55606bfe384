//! Start / Clear button row

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skewnono_app::state::SelectorAction;

use crate::theme::{palette, styles};

/// Buttons below the option panels
pub struct ActionBar {
    cursor: usize,
    focused: bool,
    can_start: bool,
}

impl ActionBar {
    pub fn new(cursor: usize, focused: bool, can_start: bool) -> Self {
        Self {
            cursor,
            focused,
            can_start,
        }
    }

    fn button_style(&self, idx: usize, action: SelectorAction) -> Style {
        let enabled = match action {
            SelectorAction::Start => self.can_start,
            SelectorAction::Clear => true,
        };

        if self.focused && idx == self.cursor {
            styles::focused_selected()
        } else if !enabled {
            styles::text_muted().add_modifier(Modifier::DIM)
        } else if action == SelectorAction::Start {
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD)
        } else {
            styles::text_secondary()
        }
    }
}

impl Widget for ActionBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (idx, action) in SelectorAction::ALL.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(
                format!("[ {} ]", action.label()),
                self.button_style(idx, *action),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
