//! Header widget displaying the browsed tile.

use client_frontend_core::TileInspector;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppState, Focus};

/// Render the header panel with the tile position and the focused panel.
pub fn render(frame: &mut Frame, area: Rect, inspector: &TileInspector, app_state: &AppState) {
    let focus_text = match (app_state.focus, app_state.searching) {
        (Focus::Inspector, _) => " [ITEMS]",
        (Focus::Palette, false) => " [CREATURES]",
        (Focus::Palette, true) => " [SEARCH]",
    };

    let text = vec![Line::from(vec![
        Span::styled(
            inspector.position_label(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(
            inspector.item_count_label(),
            Style::default().fg(Color::LightGreen),
        ),
        Span::styled(
            focus_text,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Browse Field"));

    frame.render_widget(paragraph, area);
}
