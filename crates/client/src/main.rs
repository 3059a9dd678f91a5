//! Map editor binary.
//!
//! Main entry point for the tile inspector.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Content (tile fixture and creature catalog) via map-content loaders
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Usage
//!
//! ```bash
//! mapedit [TILE_FILE] [CREATURE_CATALOG]
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use mapedit_client::{Editor, EditorConfig, describe, load_palette, load_tile};

    // 1. Load configuration from environment and arguments
    let editor_config = EditorConfig::from_env().with_args(std::env::args().skip(1));
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(&cli_config.session_id)?;

    tracing::info!("Starting map editor");
    tracing::info!("Tile file: {:?}", editor_config.tile_file);
    tracing::info!("Creature catalog: {:?}", editor_config.creature_catalog);

    // 3. Load content
    let tile = load_tile(&editor_config)?;
    let palette = load_palette(&editor_config)?;

    // 4. Build Frontend
    let frontend = CliFrontend::new(frontend_config, cli_config, palette);

    // 5. Build and run
    let editor = Editor::builder().tile(tile).frontend(frontend).build()?;
    let outcome = editor.run()?;

    println!("{}", describe(&outcome));
    tracing::info!("Editor shutdown complete");
    Ok(())
}
