//! Event loop orchestrating user input and rendering.
//!
//! The inspector is modal: the loop owns the dialog until a command closes it,
//! then reports how it ended together with the palette state.

use std::time::Duration;

use anyhow::Result;
use client_frontend_core::{FrontendConfig, InspectorOutcome, MessageLog, TileInspector};
use map_core::CreaturePalette;

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};

pub(crate) const POLL_INTERVAL_MS: u64 = 250;

/// How the loop ended.
#[derive(Debug)]
pub struct LoopExit {
    pub outcome: InspectorOutcome,
    pub palette: CreaturePalette,
}

/// Event loop driving one inspector session.
///
/// Owns every piece of presentation state:
/// - the open [`TileInspector`] with exclusive access to the tile
/// - the creature palette the user can pick a brush from
/// - the status message log
pub struct EventLoop<'t> {
    pub(crate) inspector: TileInspector<'t>,
    pub(crate) palette: CreaturePalette,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    pub(crate) messages: MessageLog,
    pub(crate) frontend_config: FrontendConfig,
    pub(crate) cli_config: CliConfig,
}

impl<'t> EventLoop<'t> {
    pub fn new(
        inspector: TileInspector<'t>,
        palette: CreaturePalette,
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        let mut messages = MessageLog::new(frontend_config.messages.capacity);
        messages.info(format!(
            "Browsing tile {} ({} items)",
            inspector.tile().position,
            inspector.len()
        ));

        Self {
            inspector,
            palette,
            input: InputHandler::new(),
            app_state: AppState::new(),
            messages,
            frontend_config,
            cli_config,
        }
    }

    pub fn run(mut self, terminal: &mut Tui) -> Result<LoopExit> {
        self.render(terminal)?;

        loop {
            if let Some(outcome) = self.handle_input_tick(terminal)? {
                tracing::info!(confirmed = outcome.is_confirmed(), "inspector closed");
                return Ok(LoopExit {
                    outcome,
                    palette: self.palette,
                });
            }
        }
    }

    pub(crate) fn poll_interval() -> Duration {
        Duration::from_millis(POLL_INTERVAL_MS)
    }
}
