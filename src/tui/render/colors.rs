//! Color palette for the TUI

use ratatui::style::Color;

// UI Chrome
pub const BORDER: Color = Color::Rgb(100, 110, 130);
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Working tree state
pub const STATE_IDLE: Color = Color::Rgb(120, 180, 120);
pub const STATE_IN_PROGRESS: Color = Color::Rgb(200, 180, 100);

// Files
pub const FILE_CONFLICTED: Color = Color::Rgb(200, 100, 100);
pub const FILE_STAGED: Color = Color::Rgb(120, 180, 120);

// Modals
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);
pub const MODAL_BORDER: Color = Color::Rgb(100, 180, 220);
pub const MODAL_BORDER_WARNING: Color = Color::Rgb(200, 160, 80);
pub const MODAL_BORDER_ERROR: Color = Color::Rgb(200, 100, 100);

// Accent (for confirmations)
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
pub const ACCENT_NEGATIVE: Color = Color::Rgb(200, 100, 100);
