//! Top-level editor session wiring content loading to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Editor (composition root)
//!   ├─→ Tile (loaded from a RON fixture or the demo tile)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The frontend owns the tile for the length of the session and hands back a
//! [`SessionOutcome`]; the editor reports it.

mod builder;
pub mod config;

pub use builder::EditorBuilder;
pub use config::EditorConfig;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::{FrontendApp, SessionOutcome};

use anyhow::{Context, Result};
use map_content::{CreatureCatalogLoader, TileLoader};
use map_core::{CreaturePalette, Item, Position, Tile, TileFlags};

/// One tile inspector session.
pub struct Editor<F> {
    tile: Tile,
    frontend: F,
}

impl<F: FrontendApp> Editor<F> {
    /// Create a new EditorBuilder.
    pub fn builder() -> EditorBuilder<F> {
        EditorBuilder::new()
    }

    /// Run the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails.
    pub fn run(self) -> Result<SessionOutcome> {
        let position = self.tile.position;
        tracing::info!(%position, items = self.tile.item_count(), "Starting inspector session");

        let outcome = self.frontend.run(self.tile)?;

        tracing::info!(
            %position,
            confirmed = outcome.confirmed,
            items = outcome.tile.item_count(),
            brush = ?outcome.brush,
            "Inspector session finished"
        );
        Ok(outcome)
    }
}

/// Loads the configured tile, or the demo tile when none is configured.
pub fn load_tile(config: &EditorConfig) -> Result<Tile> {
    match &config.tile_file {
        Some(path) => TileLoader::load(path),
        None => {
            tracing::info!("No tile file configured, using the demo tile");
            Ok(demo_tile())
        }
    }
}

/// Builds the creature palette from the configured catalog.
pub fn load_palette(config: &EditorConfig) -> Result<CreaturePalette> {
    let Some(path) = &config.creature_catalog else {
        return Ok(CreaturePalette::default());
    };
    let tilesets = CreatureCatalogLoader::load(path)
        .with_context(|| format!("Failed to load creature catalog {}", path.display()))?;
    Ok(CreaturePalette::new(tilesets))
}

/// A small depot-corner tile with ground and a few stacked items.
pub fn demo_tile() -> Tile {
    Tile::new(Position::new(32369, 32241, 7))
        .with_ground(Item::with_id(4526, "grass"))
        .with_item(Item::with_id(1987, "bag"))
        .with_item(Item::with_id(2148, "gold coin"))
        .with_item(Item::with_id(2160, "crystal coin"))
        .with_item(Item::with_id(2400, "magic sword"))
        .with_flags(TileFlags::PROTECTION_ZONE)
}

/// One-line summary printed after the session.
pub fn describe(outcome: &SessionOutcome) -> String {
    let verdict = if outcome.confirmed {
        "confirmed"
    } else {
        "cancelled"
    };
    let mut text = format!(
        "Tile {} {verdict}: {} item(s)",
        outcome.tile.position,
        outcome.tile.item_count()
    );
    if let Some(brush) = &outcome.brush {
        text.push_str(&format!(", brush: {brush} ({} palette)", brush.palette()));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_core::{BrushRef, ItemId};
    use std::io::Write;

    /// Deletes the top item and confirms with its RAW brush.
    struct ScriptedFrontend;

    impl FrontendApp for ScriptedFrontend {
        fn run(self, mut tile: Tile) -> Result<SessionOutcome> {
            let top = tile.items.pop().context("tile has no items")?;
            Ok(SessionOutcome {
                tile,
                confirmed: true,
                brush: top.raw_brush(),
            })
        }
    }

    #[test]
    fn builder_requires_tile_and_frontend() {
        assert!(Editor::<ScriptedFrontend>::builder().build().is_err());
        assert!(
            Editor::builder()
                .frontend(ScriptedFrontend)
                .build()
                .is_err()
        );
    }

    #[test]
    fn run_returns_frontend_outcome() {
        let editor = Editor::builder()
            .tile(demo_tile())
            .frontend(ScriptedFrontend)
            .build()
            .unwrap();

        let outcome = editor.run().unwrap();

        assert_eq!(outcome.tile.item_count(), 4);
        assert_eq!(outcome.brush, Some(BrushRef::Raw(ItemId(2400))));
        assert_eq!(
            describe(&outcome),
            "Tile x=32369,  y=32241,  z=7 confirmed: 4 item(s), brush: RAW 2400 (raw palette)"
        );
    }

    #[test]
    fn load_tile_falls_back_to_demo() {
        let tile = load_tile(&EditorConfig::default()).unwrap();
        assert_eq!(tile, demo_tile());
    }

    #[test]
    fn load_palette_reads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"(tilesets: [(name: "Monsters", creatures: [(name: "Rat")])])"#)
            .unwrap();
        let config = EditorConfig {
            tile_file: None,
            creature_catalog: Some(file.path().to_path_buf()),
        };

        let palette = load_palette(&config).unwrap();

        assert_eq!(palette.selected_creature().unwrap().name, "Rat");
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let config = EditorConfig {
            tile_file: None,
            creature_catalog: Some("does/not/exist.ron".into()),
        };
        assert!(load_palette(&config).is_err());
    }
}
