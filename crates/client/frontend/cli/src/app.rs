//! Glue code tying the models, the event loop, and the terminal together.
use anyhow::Result;
use map_core::{CreaturePalette, Tile};

use crate::config::CliConfig;
use crate::event::{EventLoop, LoopExit};
use crate::presentation::terminal;
use client_frontend_core::{
    FrontendConfig, InspectorOutcome, SessionOutcome, TileInspector, frontend::FrontendApp,
};

/// Terminal frontend for one tile inspector session.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    palette: CreaturePalette,
}

impl CliFrontend {
    pub fn new(
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
        mut palette: CreaturePalette,
    ) -> Self {
        frontend_config.palette.apply(&mut palette);
        Self {
            frontend_config,
            cli_config,
            palette,
        }
    }

    /// Palette state as it will be seen when the session opens.
    pub fn palette(&self) -> &CreaturePalette {
        &self.palette
    }

    /// Runs the session and also returns the palette so callers can keep
    /// creature selections and loaded folders across sessions.
    pub fn execute(self, tile: Tile) -> Result<(SessionOutcome, CreaturePalette)> {
        tracing::info!(position = %tile.position, "CLI inspector starting...");

        let CliFrontend {
            frontend_config,
            cli_config,
            palette,
        } = self;

        // Edits land on a copy until the user confirms.
        let mut working = tile.clone();
        let event_loop = EventLoop::new(
            TileInspector::open(&mut working),
            palette,
            frontend_config,
            cli_config,
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let exit = event_loop.run(&mut terminal)?;

        tracing::info!("CLI inspector exiting");
        Ok(finish(tile, working, exit))
    }
}

/// Picks the tile to hand back: the edited copy on confirm, the untouched
/// original on cancel.
fn finish(original: Tile, working: Tile, exit: LoopExit) -> (SessionOutcome, CreaturePalette) {
    let outcome = match exit.outcome {
        InspectorOutcome::Confirmed { brush } => SessionOutcome {
            tile: working,
            confirmed: true,
            brush,
        },
        InspectorOutcome::Cancelled => SessionOutcome {
            tile: original,
            confirmed: false,
            brush: None,
        },
    };
    (outcome, exit.palette)
}

impl FrontendApp for CliFrontend {
    fn run(self, tile: Tile) -> Result<SessionOutcome> {
        self.execute(tile).map(|(outcome, _palette)| outcome)
    }
}
