//! Data-driven editor content and loaders.
//!
//! This crate reads RON files into `map-core` types:
//! - Tile fixtures (one tile with its ground, item stack, and zone flags)
//! - Creature catalogs (tilesets of creature types for the creature palette)
//! - Creature folders (one creature per file, merged into the palette as NPCs or monsters)
//!
//! Content is consumed by frontends and never mutated here.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CreatureCatalogLoader, CreatureFolderLoader, LoadResult, TileLoader};
