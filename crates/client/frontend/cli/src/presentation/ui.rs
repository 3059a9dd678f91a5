//! UI rendering entry point.
//!
//! Composes the header, the inspector and palette panels, the message log,
//! and the key hints into one frame.
use anyhow::Result;
use client_frontend_core::{MessageLog, TileInspector};
use map_core::CreaturePalette;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    config::UiConfig,
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::{AppState, Focus},
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a, 't> {
    pub inspector: &'a TileInspector<'t>,
    pub palette: &'a CreaturePalette,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub ui: &'a UiConfig,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, ctx))?;
    Ok(())
}

pub fn render_frame(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Header
            Constraint::Min(0),                            // Panels
            Constraint::Length(ctx.ui.message_panel_height), // Messages
            Constraint::Length(3),                         // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.inspector, ctx.app_state);

    let palette_width = ctx.ui.palette_width_percent.min(100);
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - palette_width),
            Constraint::Percentage(palette_width),
        ])
        .split(chunks[1]);

    widgets::inspector::render(
        frame,
        panels[0],
        ctx.inspector,
        ctx.app_state.focus == Focus::Inspector,
        &theme,
    );
    widgets::palette::render(frame, panels[1], ctx.palette, ctx.app_state, &theme);

    let recent: Vec<_> = ctx
        .messages
        .recent(ctx.ui.message_panel_height.saturating_sub(2) as usize)
        .cloned()
        .collect();
    widgets::messages::render(frame, chunks[2], &recent, &theme);

    widgets::footer::render(frame, chunks[3], ctx.app_state);
}
