//! Input locations for an editor session.
use std::env;
use std::path::PathBuf;

/// Where the session's tile and creature catalog come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorConfig {
    /// RON tile fixture. The demo tile is used when absent.
    pub tile_file: Option<PathBuf>,
    /// RON creature catalog. The palette starts empty when absent.
    pub creature_catalog: Option<PathBuf>,
}

impl EditorConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MAPEDIT_TILE_FILE` - Tile fixture to browse
    /// - `MAPEDIT_CREATURE_CATALOG` - Creature catalog for the palette
    pub fn from_env() -> Self {
        Self {
            tile_file: env::var_os("MAPEDIT_TILE_FILE").map(PathBuf::from),
            creature_catalog: env::var_os("MAPEDIT_CREATURE_CATALOG").map(PathBuf::from),
        }
    }

    /// Positional arguments `[TILE_FILE] [CREATURE_CATALOG]` override the
    /// environment.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        if let Some(tile) = args.next() {
            self.tile_file = Some(PathBuf::from(tile));
        }
        if let Some(catalog) = args.next() {
            self.creature_catalog = Some(PathBuf::from(catalog));
        }
        self
    }
}
