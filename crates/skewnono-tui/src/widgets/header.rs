//! Header bar widget
//!
//! Shows the app title, the current route and whether the selection is complete.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skewnono_app::Route;

use crate::theme::styles;

/// Top bar: "● SkewNoNo / <route title>" with a route path on the right
pub struct AppHeader {
    route: Route,
    complete: bool,
}

impl AppHeader {
    pub fn new(route: Route, complete: bool) -> Self {
        Self { route, complete }
    }
}

impl Widget for AppHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (dot, status) = if self.complete {
            ("●", "ready")
        } else {
            ("○", "incomplete")
        };

        let left = Line::from(vec![
            Span::styled(dot, styles::completion(self.complete)),
            Span::raw(" "),
            Span::styled("SkewNoNo", styles::title()),
            Span::styled(" / ", styles::text_muted()),
            Span::styled(self.route.title(), styles::text_secondary()),
        ]);
        Paragraph::new(left).render(inner, buf);

        let right = Line::from(vec![
            Span::styled(status, styles::completion(self.complete)),
            Span::raw("  "),
            Span::styled(self.route.path(), styles::text_muted()),
        ]);
        let right_width = right.width() as u16;
        let left_width = Line::from(format!("● SkewNoNo / {}", self.route.title())).width() as u16;

        // Right side only when it does not collide with the title
        if left_width + right_width + 2 <= inner.width {
            let right_area = Rect {
                x: inner.x + inner.width - right_width,
                y: inner.y,
                width: right_width,
                height: 1,
            };
            Paragraph::new(right).render(right_area, buf);
        }
    }
}
