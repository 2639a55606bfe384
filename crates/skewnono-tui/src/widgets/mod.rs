//! Custom widget components

mod actions;
mod footer;
mod header;
mod option_panel;
mod summary_card;

pub use actions::ActionBar;
pub use footer::Footer;
pub use header::AppHeader;
pub use option_panel::OptionPanel;
pub use summary_card::SummaryCard;
