//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop<'_> {
    /// Render the current inspector and palette state.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            inspector: &self.inspector,
            palette: &self.palette,
            messages: &self.messages,
            app_state: &self.app_state,
            ui: &self.cli_config.ui,
        };

        ui::render(terminal, &ctx)
    }
}
