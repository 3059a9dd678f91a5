//! Creature palette panel.

use map_core::{BrushMode, CreaturePalette};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    presentation::theme::RatatuiTheme,
    state::{AppState, Focus},
};

/// Tileset names with the selected one bracketed.
pub fn tileset_line(palette: &CreaturePalette) -> String {
    if palette.tilesets().is_empty() {
        return "(no tilesets)".to_owned();
    }
    let selected = palette.selected_tileset_index();
    palette
        .tilesets()
        .iter()
        .enumerate()
        .map(|(index, tileset)| {
            if Some(index) == selected {
                format!("<{}>", tileset.name)
            } else {
                tileset.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &CreaturePalette,
    app_state: &AppState,
    theme: &RatatuiTheme,
) {
    let focused = app_state.focus == Focus::Palette;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(5),
        ])
        .split(area);

    let search = if app_state.searching {
        format!("Search: {}_", palette.filter())
    } else if palette.filter().is_empty() {
        tileset_line(palette)
    } else {
        format!("{}  [filter: {}]", tileset_line(palette), palette.filter())
    };
    let header = Paragraph::new(search).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border(focused))
            .title(" Creatures "),
    );
    frame.render_widget(header, chunks[0]);

    let creature_mode = palette.mode() == BrushMode::Creature;
    let items: Vec<ListItem> = palette
        .visible_creatures()
        .into_iter()
        .map(|creature| ListItem::new(format!("{} ({})", creature.name, creature.kind)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border(focused)),
        )
        .highlight_symbol("► ")
        .highlight_style(theme.emphasize_current(theme.button(creature_mode)));
    let mut state = ListState::default();
    state.select(palette.selected_creature_index());
    frame.render_stateful_widget(list, chunks[1], &mut state);

    let mode = match palette.mode() {
        BrushMode::Creature => "Creature brush",
        BrushMode::Spawn => "Spawn brush",
    };
    let lines = vec![
        Line::from(vec![
            Span::raw("Mode: "),
            Span::styled(mode, Style::default().fg(Color::Cyan)),
        ]),
        Line::raw(format!("Spawn time: {}s", palette.spawn_time())),
        Line::raw(format!("Spawn size: {}", palette.spawn_size())),
    ];
    let settings = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(settings, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_core::Tileset;

    #[test]
    fn tileset_line_marks_selection() {
        let palette =
            CreaturePalette::new(vec![Tileset::new("Monsters"), Tileset::new("NPCs")]);
        assert_eq!(tileset_line(&palette), "<Monsters>  NPCs");
        assert_eq!(tileset_line(&CreaturePalette::default()), "(no tilesets)");
    }
}
