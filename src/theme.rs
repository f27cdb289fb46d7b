//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and common styles so the widgets stay
//! visually consistent.

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Primary accent color - borders, titles
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Success/confirmation messages
    pub const SUCCESS: Color = Color::Green;

    /// Error/rejection messages
    pub const ERROR: Color = Color::Red;

    /// Highlight background for selected list rows
    pub const HIGHLIGHT_BG: Color = Color::Blue;

    /// Rating bars in the chart (the original tool drew these sky blue)
    pub const RATING_BAR: Color = Color::Rgb(135, 206, 235);

    /// Box-office revenue line in the chart
    pub const REVENUE_LINE: Color = Color::Rgb(255, 165, 0);
}

/// Pre-built styles used across screens
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Colors::HIGHLIGHT_BG)
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }
}
