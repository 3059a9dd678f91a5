//! Ratatui styling for the editor panels.

use client_frontend_core::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Consistent color scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Border style of a panel, highlighted while it has keyboard focus.
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn item_row(&self, selected: bool, ground: bool) -> Style {
        let base = if ground {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        if selected {
            base.bg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            base
        }
    }

    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn fact(&self, holds: bool) -> Style {
        if holds {
            Style::default().fg(Color::LightGreen)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn emphasize_current(&self, base_style: Style) -> Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}
