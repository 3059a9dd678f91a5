//! References to editor brushes.
//!
//! Brushes themselves (painting, previews, sprites) belong to the editor's
//! brush subsystem. Panels in this crate only decide *which* brush the editor
//! should activate and hand back a [`BrushRef`].

use core::fmt;

use crate::item::ItemId;

/// Identifies a brush the editor can activate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BrushRef {
    /// Places exactly one item type, bypassing auto-bordering rules.
    Raw(ItemId),
    /// Places a single creature by name.
    Creature(String),
    /// Places a spawn area.
    Spawn,
}

impl BrushRef {
    /// Palette the editor should switch to when activating this brush.
    pub fn palette(&self) -> PaletteKind {
        match self {
            Self::Raw(_) => PaletteKind::Raw,
            Self::Creature(_) | Self::Spawn => PaletteKind::Creature,
        }
    }
}

impl fmt::Display for BrushRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(id) => write!(f, "RAW {id}"),
            Self::Creature(name) => write!(f, "creature {name}"),
            Self::Spawn => f.write_str("spawn"),
        }
    }
}

/// Palette pages a brush can live on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PaletteKind {
    Raw,
    Creature,
}
