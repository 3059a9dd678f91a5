//! Creature catalog and creature folder loaders.

use std::path::{Path, PathBuf};

use map_core::{CreatureKind, CreaturePalette, CreatureType, Tileset};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Creature catalog structure for RON files.
///
/// ```ron
/// (
///     tilesets: [
///         (name: "Monsters", creatures: [(name: "Rat", kind: Monster, look_type: 21)]),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureCatalog {
    pub tilesets: Vec<Tileset>,
}

/// Loader for creature catalogs from RON files.
pub struct CreatureCatalogLoader;

impl CreatureCatalogLoader {
    /// Load every tileset from a catalog file.
    pub fn load(path: &Path) -> LoadResult<Vec<Tileset>> {
        let content = read_file(path)?;
        let catalog: CreatureCatalog = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse creature catalog RON at {}: {}",
                path.display(),
                e
            )
        })?;

        Ok(catalog.tilesets)
    }
}

/// Loader for folders holding one creature per `.ron` file.
///
/// Expected directory structure:
/// ```text
/// npcs/
///   ├── sam.ron      (name: "Sam", look_type: 131)
///   └── frodo.ron    (name: "Frodo", look_type: 128)
/// ```
pub struct CreatureFolderLoader;

impl CreatureFolderLoader {
    pub const NPC_TILESET: &'static str = "NPCs";
    pub const MONSTER_TILESET: &'static str = "Monsters";

    /// Load every creature in `dir`, forcing each one's kind to `kind`.
    ///
    /// Files that fail to parse are skipped with a warning; an unreadable
    /// directory is an error.
    pub fn load(dir: &Path, kind: CreatureKind) -> LoadResult<Vec<CreatureType>> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read folder {}: {}", dir.display(), e))?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "ron"))
            .collect();
        paths.sort();

        let mut creatures = Vec::with_capacity(paths.len());
        for path in paths {
            let parsed = read_file(&path).and_then(|content| {
                ron::from_str::<CreatureType>(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse creature RON: {}", e))
            });
            match parsed {
                Ok(mut creature) => {
                    creature.kind = kind;
                    creatures.push(creature);
                }
                Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
            }
        }

        Ok(creatures)
    }

    /// Load NPCs from `dir` into the palette's NPC tileset.
    pub fn load_npcs(palette: &mut CreaturePalette, dir: &Path) -> LoadResult<usize> {
        let creatures = Self::load(dir, CreatureKind::Npc)?;
        Ok(palette.add_creatures(Self::NPC_TILESET, creatures))
    }

    /// Load monsters from `dir` into the palette's monster tileset.
    pub fn load_monsters(palette: &mut CreaturePalette, dir: &Path) -> LoadResult<usize> {
        let creatures = Self::load(dir, CreatureKind::Monster)?;
        Ok(palette.add_creatures(Self::MONSTER_TILESET, creatures))
    }
}
