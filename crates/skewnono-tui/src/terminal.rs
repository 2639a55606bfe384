//! Terminal setup and restoration

/// Install a panic hook that logs the panic and restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!("Panic: {}", panic_info);
        ratatui::restore();
        original_hook(panic_info);
    }));
}
