//! Shared styling for the reservation screens.
//!
//! The palette follows the house branding: warm amber accents on the
//! default terminal background, one color per seating area.

use ratatui::style::{Color, Modifier, Style};
use savory_core::TableType;

/// Accent color for each seating area, used on the floor plan and legend.
pub fn table_color(table_type: TableType) -> Color {
    match table_type {
        TableType::Window => Color::Blue,
        TableType::Private => Color::Magenta,
        TableType::Center => Color::Green,
        TableType::Bar => Color::Yellow,
    }
}

/// Section headings ("Select Your Table", ...).
pub fn heading() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Secondary copy under headings, hints, placeholders.
pub fn text_muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Block borders; focused controls get the accent.
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Tables that cannot be reserved tonight.
pub fn unavailable() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM)
}

/// The floor-plan cursor and list highlight.
pub fn highlight() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// The submit control, dimmed until the form is complete.
pub fn submit(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }
}

/// Confirmation check mark and heading.
pub fn success() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}
