//! TUI entry point and event loop

use ratatui::DefaultTerminal;
use skewnono_app::{process_message, AppState};
use skewnono_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive selector until the user quits
///
/// The terminal is restored on every exit path, including errors.
pub fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    info!(
        "SkewNoNo starting on {} (fab={:?}, tool={:?})",
        state.route,
        state.selection.selected_fab(),
        state.selection.selected_tool()
    );

    let result = run_loop(&mut term, &mut state);

    ratatui::restore();

    match &result {
        Ok(()) => info!("SkewNoNo exiting"),
        Err(e) => error!("SkewNoNo exiting with error: {}", e),
    }
    result
}

fn run_loop(term: &mut DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        term.draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("draw failed: {e}")))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }
    Ok(())
}
