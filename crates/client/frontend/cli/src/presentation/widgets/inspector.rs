//! Inspector panel: the item list, its buttons, and the tile facts.

use client_frontend_core::{TileFact, TileInspector};
use map_core::ListControls;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

use crate::presentation::theme::RatatuiTheme;

/// Dialog buttons in display order with their enabled state.
pub fn buttons(controls: ListControls) -> [(&'static str, bool); 6] {
    [
        ("Delete", controls.delete),
        ("Select RAW", controls.select_raw),
        ("Move Up", controls.move_up),
        ("Move Down", controls.move_down),
        ("OK", true),
        ("Cancel", true),
    ]
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    inspector: &TileInspector,
    focused: bool,
    theme: &RatatuiTheme,
) {
    let facts_height = TileFact::iter().count() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(facts_height),
        ])
        .split(area);

    render_items(frame, chunks[0], inspector, focused, theme);
    render_buttons(frame, chunks[1], inspector.controls(), theme);
    render_facts(frame, chunks[2], inspector, theme);
}

fn render_items(
    frame: &mut Frame,
    area: Rect,
    inspector: &TileInspector,
    focused: bool,
    theme: &RatatuiTheme,
) {
    let items: Vec<ListItem> = inspector
        .rows()
        .into_iter()
        .map(|row| {
            let label = if row.ground {
                format!("{}  (ground)", row.label)
            } else {
                row.label
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("[{:>5}] ", row.client_id)),
                Span::raw(label),
            ]))
            .style(theme.item_row(row.selected, row.ground))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border(focused))
                .title(" Items (top of stack first) "),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default();
    if focused && !inspector.is_empty() {
        state.select(Some(inspector.cursor()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_buttons(frame: &mut Frame, area: Rect, controls: ListControls, theme: &RatatuiTheme) {
    let mut spans = Vec::new();
    for (label, enabled) in buttons(controls) {
        spans.push(Span::styled(format!("[{label}]"), theme.button(enabled)));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_facts(frame: &mut Frame, area: Rect, inspector: &TileInspector, theme: &RatatuiTheme) {
    let lines: Vec<Line> = TileFact::iter()
        .zip(inspector.fact_labels())
        .map(|(fact, label)| Line::styled(label, theme.fact(fact.holds(inspector.tile()))))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Tile "));
    frame.render_widget(paragraph, area);
}
