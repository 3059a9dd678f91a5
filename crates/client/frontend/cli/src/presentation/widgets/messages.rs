//! Messages widget displaying recent status entries.

use client_frontend_core::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the message log panel.
///
/// `messages` are newest first; the newest entry is drawn at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &[MessageEntry], theme: &RatatuiTheme) {
    let items: Vec<ListItem> = messages
        .iter()
        .map(|entry| ListItem::new(entry.text.as_str()).style(theme.style_message(entry.level)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}
