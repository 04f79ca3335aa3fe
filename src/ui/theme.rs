//! Colors used by the monitor UI.

use ratatui::style::Color;

use crate::markup::NamedColor;

/// Status block when the last probe succeeded
pub const COLOR_CONNECTED: Color = Color::Green;

/// Status block when the last probe failed, and before the first one
pub const COLOR_DISCONNECTED: Color = Color::Red;

/// Log panel border
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Log panel title
pub const COLOR_TITLE: Color = Color::White;

/// Hints and secondary text
pub const COLOR_DIM: Color = Color::DarkGray;

/// Exactly one of two colors, chosen by connectivity.
pub fn status_color(connected: bool) -> Color {
    if connected {
        COLOR_CONNECTED
    } else {
        COLOR_DISCONNECTED
    }
}

/// Terminal color for a markup color name.
pub fn named_color(color: NamedColor) -> Color {
    match color {
        NamedColor::Red => Color::Red,
        NamedColor::Green => Color::Green,
        NamedColor::Yellow => Color::Yellow,
        NamedColor::Blue => Color::Blue,
        NamedColor::Cyan => Color::Cyan,
        NamedColor::Magenta => Color::Magenta,
        NamedColor::White => Color::White,
        NamedColor::Gray => Color::Gray,
    }
}
