//! Editor builder with dependency injection pattern.

use anyhow::{Context, Result};
use client_frontend_core::FrontendApp;
use map_core::Tile;

use crate::Editor;

/// Builder for constructing an Editor with proper validation.
///
/// Tile and frontend are required; missing fields cause `build()` to fail.
pub struct EditorBuilder<F> {
    tile: Option<Tile>,
    frontend: Option<F>,
}

impl<F> Default for EditorBuilder<F> {
    fn default() -> Self {
        Self {
            tile: None,
            frontend: None,
        }
    }
}

impl<F: FrontendApp> EditorBuilder<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tile to inspect (required).
    pub fn tile(mut self, tile: Tile) -> Self {
        self.tile = Some(tile);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: F) -> Self {
        self.frontend = Some(frontend);
        self
    }

    /// Build the Editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile or the frontend is not set.
    pub fn build(self) -> Result<Editor<F>> {
        let tile = self
            .tile
            .context("Tile is required. Use .tile() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Editor { tile, frontend })
    }
}
