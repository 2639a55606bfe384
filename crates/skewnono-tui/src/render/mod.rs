//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use skewnono_app::state::Panel;
use skewnono_app::{AppState, Route};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI
///
/// Pure with respect to `state`; the route decides which body is drawn.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let show_hints = state.settings.ui.show_key_hints;
    let areas = layout::create(area, show_hints);

    frame.render_widget(
        widgets::AppHeader::new(state.route, state.selection.is_complete()),
        areas.header,
    );

    match state.route {
        Route::Selector => render_selector(frame, areas.body, state),
        Route::Main => frame.render_widget(
            widgets::SummaryCard::new(state.selection.summary()),
            areas.body,
        ),
    }

    frame.render_widget(
        widgets::Footer::new(state.selection.summary(), state.route)
            .notice(state.notice.as_ref())
            .show_key_hints(show_hints),
        areas.footer,
    );
}

fn render_selector(frame: &mut Frame, body: ratatui::layout::Rect, state: &AppState) {
    let areas = layout::selector(body);
    let selection = &state.selection;

    let fabs = widgets::OptionPanel::new(
        "Fab",
        selection.fab_options().iter().map(|f| f.as_str()).collect(),
        selection.selected_fab(),
    )
    .cursor(state.fab_cursor)
    .focused(state.focus == Panel::Fab)
    .numbered(true);
    frame.render_widget(fabs, areas.fabs);

    let tools = widgets::OptionPanel::new(
        "Tool",
        selection.tool_options().iter().map(|t| t.as_str()).collect(),
        selection.selected_tool(),
    )
    .cursor(state.tool_cursor)
    .focused(state.focus == Panel::Tool);
    frame.render_widget(tools, areas.tools);

    frame.render_widget(
        widgets::ActionBar::new(
            state.action_cursor,
            state.focus == Panel::Actions,
            selection.is_complete(),
        ),
        areas.actions,
    );
}
