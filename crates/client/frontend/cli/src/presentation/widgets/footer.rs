//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppState, Focus};

/// Key hints for the current focus and input mode.
pub fn hints(app_state: &AppState) -> &'static str {
    match (app_state.focus, app_state.searching) {
        (_, true) => "[type] Filter | [Backspace] Erase | [Enter/ESC] Done",
        (Focus::Inspector, false) => {
            "[↑↓] Cursor | [Enter] Select | [Space] Toggle | [d] Delete | [r] Select RAW | \
             [u/n] Up/Down | [o] OK | [ESC] Cancel | [Tab] Palette"
        }
        (Focus::Palette, false) => {
            "[↑↓] Creature | [←→] Tileset | [s] Spawn | [+/-] Time | [[/]] Size | [/] Search | \
             [N/M] Load NPCs/Monsters | [p] Purge | [Enter] Use | [Tab] Items"
        }
    }
}

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let paragraph =
        Paragraph::new(Line::raw(hints(app_state))).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
