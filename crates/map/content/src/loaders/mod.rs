//! Content loaders for reading editor data from files.

pub mod creatures;
pub mod tile;

pub use creatures::{CreatureCatalogLoader, CreatureFolderLoader};
pub use tile::TileLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
