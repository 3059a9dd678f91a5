//! Editor-side map data and the models behind the editor's panels.
//!
//! `map-core` defines tiles, the items stacked on them, and the pure models
//! that inspector and palette frontends drive:
//! - [`list::TileItemList`] keeps a display-ordered view of one tile's items
//!   and applies delete / move up / move down edits to the tile.
//! - [`palette::CreaturePalette`] tracks creature and spawn brush selection.
//!
//! Nothing here renders or performs I/O. Frontends translate user gestures
//! into calls on these models and draw the resulting state.
pub mod brush;
pub mod error;
pub mod item;
pub mod list;
pub mod palette;
pub mod selection;
pub mod tile;

pub use brush::{BrushRef, PaletteKind};
pub use error::{EditorError, ErrorSeverity, PaletteError};
pub use item::{Item, ItemId};
pub use list::{ListControls, Slot, TileItemList};
pub use palette::{BrushMode, CreatureKind, CreaturePalette, CreatureType, Tileset};
pub use selection::Selection;
pub use tile::{Position, Tile, TileFlags};
