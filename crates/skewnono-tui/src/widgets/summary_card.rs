//! Main screen card showing the active fab/tool pair

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skewnono_app::SelectionSummary;

use crate::layout::center_rect;
use crate::theme::styles;

const CARD_WIDTH: u16 = 40;
const CARD_HEIGHT: u16 = 8;

pub struct SummaryCard {
    summary: SelectionSummary,
}

impl SummaryCard {
    pub fn new(summary: SelectionSummary) -> Self {
        Self { summary }
    }
}

impl Widget for SummaryCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = center_rect(CARD_WIDTH, CARD_HEIGHT, area);
        let block = styles::card_block(true).title(Span::styled(" Active Selection ", styles::title()));
        let inner = block.inner(card);
        block.render(card, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled("Fab   ", styles::text_secondary()),
                Span::styled(self.summary.fab, styles::chosen()),
            ]),
            Line::from(vec![
                Span::styled("Tool  ", styles::text_secondary()),
                Span::styled(self.summary.tool, styles::chosen()),
            ]),
            Line::default(),
            Line::from(Span::styled("b to change selection", styles::text_muted())),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_card_shows_selection() {
        let mut term = TestTerminal::new();
        let card = SummaryCard::new(SelectionSummary {
            fab: "M16".into(),
            tool: "HV-SEM".into(),
        });
        term.render_widget(card, term.area());

        assert!(term.buffer_contains("Active Selection"));
        assert!(term.buffer_contains("Fab   M16"));
        assert!(term.buffer_contains("Tool  HV-SEM"));
    }

    #[test]
    fn test_card_in_tiny_area_does_not_panic() {
        let mut term = TestTerminal::with_size(6, 2);
        term.render_widget(SummaryCard::new(SelectionSummary::default()), term.area());
    }
}
