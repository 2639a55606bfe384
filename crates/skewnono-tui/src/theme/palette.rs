//! Color palette: Material-style dark surfaces with an indigo primary.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(18, 18, 18); // App background
pub const CARD_BG: Color = Color::Rgb(30, 30, 30); // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(66, 66, 66);
pub const BORDER_ACTIVE: Color = PRIMARY;

// --- Accent ---
pub const PRIMARY: Color = Color::Rgb(121, 134, 203); // Indigo 300
pub const SECONDARY: Color = Color::Rgb(77, 182, 172); // Teal 300

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 230);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);
pub const TEXT_MUTED: Color = Color::Rgb(117, 117, 117);
/// Foreground on top of PRIMARY/SECONDARY fills
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(129, 199, 132); // Complete
pub const STATUS_YELLOW: Color = Color::Rgb(255, 213, 79); // Warning / key hints
