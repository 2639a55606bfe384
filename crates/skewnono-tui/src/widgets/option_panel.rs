//! Option list panel used for both fabs and tools

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Bordered list of option codes with a cursor and a chosen marker
pub struct OptionPanel<'a> {
    title: &'a str,
    options: Vec<&'a str>,
    chosen: &'a str,
    cursor: usize,
    focused: bool,
    numbered: bool,
}

impl<'a> OptionPanel<'a> {
    pub fn new(title: &'a str, options: Vec<&'a str>, chosen: &'a str) -> Self {
        Self {
            title,
            options,
            chosen,
            cursor: 0,
            focused: false,
            numbered: false,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Prefix rows with their quick-select digit
    pub fn numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    fn row(&self, idx: usize, code: &'a str) -> Line<'a> {
        let is_chosen = code == self.chosen;
        let marker = if is_chosen { "◉ " } else { "○ " };

        let mut spans = Vec::with_capacity(3);
        if self.numbered {
            spans.push(Span::styled(format!("{} ", idx + 1), styles::keybinding()));
        }
        spans.push(Span::raw(marker));
        spans.push(Span::raw(code));

        let style = if idx == self.cursor {
            if self.focused {
                styles::focused_selected()
            } else {
                styles::unfocused_selected()
            }
        } else if is_chosen {
            styles::chosen()
        } else {
            styles::text_primary()
        };

        Line::from(spans).style(style)
    }
}

impl Widget for OptionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.focused).title(Line::from(Span::styled(
            format!(" {} ", self.title),
            if self.focused {
                styles::title()
            } else {
                styles::text_secondary()
            },
        )));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Keep the cursor row visible in short panels
        let visible = inner.height as usize;
        let offset = self.cursor.saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = self
            .options
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, code)| self.row(idx, code))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
