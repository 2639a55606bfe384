//! Footer with the selection summary, transient notice and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skewnono_app::state::Notice;
use skewnono_app::{Route, SelectionSummary};

use crate::theme::styles;

const SELECTOR_HINTS: &[(&str, &str)] = &[
    ("Tab/←→", "panel"),
    ("↑↓", "move"),
    ("Enter", "select"),
    ("1-6", "fab"),
    ("s", "start"),
    ("c", "clear"),
    ("q", "quit"),
];

const MAIN_HINTS: &[(&str, &str)] = &[("b", "back"), ("q", "quit")];

/// Placeholder for an unset field
const UNSET: &str = "-";

pub struct Footer<'a> {
    summary: SelectionSummary,
    notice: Option<&'a Notice>,
    route: Route,
    show_key_hints: bool,
}

impl<'a> Footer<'a> {
    pub fn new(summary: SelectionSummary, route: Route) -> Self {
        Self {
            summary,
            notice: None,
            route,
            show_key_hints: true,
        }
    }

    pub fn notice(mut self, notice: Option<&'a Notice>) -> Self {
        self.notice = notice;
        self
    }

    pub fn show_key_hints(mut self, show: bool) -> Self {
        self.show_key_hints = show;
        self
    }

    fn summary_line(&self) -> Line<'static> {
        let value = |v: &str| {
            if v.is_empty() {
                Span::styled(UNSET.to_string(), styles::text_muted())
            } else {
                Span::styled(v.to_string(), styles::chosen())
            }
        };

        let mut spans = vec![
            Span::styled("Fab: ", styles::text_secondary()),
            value(&self.summary.fab),
            Span::styled("  Tool: ", styles::text_secondary()),
            value(&self.summary.tool),
        ];

        if let Some(notice) = self.notice {
            spans.push(Span::styled("  │  ", styles::text_muted()));
            spans.push(Span::styled(notice.text.clone(), styles::notice(notice.kind)));
        }

        Line::from(spans)
    }

    fn hints_line(&self) -> Line<'static> {
        let hints = match self.route {
            Route::Selector => SELECTOR_HINTS,
            Route::Main => MAIN_HINTS,
        };

        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (idx, (key, action)) in hints.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![self.summary_line()];
        if self.show_key_hints {
            lines.push(self.hints_line());
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
