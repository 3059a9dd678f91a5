//! Tile fixture loader.
//!
//! A fixture describes a single tile:
//!
//! ```ron
//! (
//!     position: (x: 100, y: 200, z: 7),
//!     ground: Some((id: 4526, name: "grass")),
//!     items: [(id: 1987, client_id: 1987, name: "bag")],
//!     flags: ["PROTECTION_ZONE", "NO_LOGOUT"],
//!     house_id: None,
//! )
//! ```
//!
//! `items` are listed bottom of the stack first. `client_id` defaults to `id`.

use std::path::Path;

use map_core::{Item, ItemId, Position, Tile, TileFlags};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemRon {
    id: u16,
    /// Sprite id; `0` or absent means "same as `id`".
    #[serde(default)]
    client_id: u16,
    name: String,
}

impl From<ItemRon> for Item {
    fn from(raw: ItemRon) -> Self {
        let client_id = if raw.client_id == 0 {
            raw.id
        } else {
            raw.client_id
        };
        Item::new(ItemId(raw.id), client_id, raw.name)
    }
}

/// Tile structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TileRon {
    position: Position,
    #[serde(default)]
    ground: Option<ItemRon>,
    #[serde(default)]
    items: Vec<ItemRon>,
    #[serde(default)]
    flags: Vec<String>,
    #[serde(default)]
    house_id: Option<u32>,
}

/// Loader for tile fixtures from RON files.
pub struct TileLoader;

impl TileLoader {
    /// Load a tile from a RON file.
    pub fn load(path: &Path) -> LoadResult<Tile> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load tile {}: {}", path.display(), e))
    }

    /// Parse a tile from RON text.
    pub fn parse(content: &str) -> LoadResult<Tile> {
        let data: TileRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tile RON: {}", e))?;

        let mut flags = TileFlags::empty();
        for name in &data.flags {
            let flag = TileFlags::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown tile flag {:?}", name))?;
            flags |= flag;
        }

        let tile = Tile {
            position: data.position,
            ground: data.ground.map(Item::from),
            items: data.items.into_iter().map(Item::from).collect(),
            flags,
            house_id: data.house_id,
        };

        tracing::debug!(
            position = %tile.position,
            items = tile.item_count(),
            "loaded tile fixture"
        );
        Ok(tile)
    }
}
