//! Items placed on map tiles.
//!
//! An [`Item`] is a single instance on a tile. Its type is identified by the
//! server-side [`ItemId`]; `client_id` only selects the sprite and carries no
//! editor semantics.

use core::fmt;

use crate::brush::BrushRef;

/// Server-side item type identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u16);

impl ItemId {
    /// Reserved id meaning "no item type".
    pub const NONE: Self = Self(0);

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single item instance stacked on (or forming the ground of) a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub client_id: u16,
    pub name: String,
    /// Editor selection flag. Never persisted.
    #[cfg_attr(feature = "serde", serde(skip))]
    selected: bool,
}

impl Item {
    pub fn new(id: ItemId, client_id: u16, name: impl Into<String>) -> Self {
        Self {
            id,
            client_id,
            name: name.into(),
            selected: false,
        }
    }

    /// Convenience constructor for items whose sprite id matches the server id.
    pub fn with_id(id: u16, name: impl Into<String>) -> Self {
        Self::new(ItemId(id), id, name)
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// RAW brush painting exactly this item type, if the type is a real one.
    pub fn raw_brush(&self) -> Option<BrushRef> {
        (!self.id.is_none()).then_some(BrushRef::Raw(self.id))
    }

    /// Row label used by item lists: `"<id> - <name>"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_not_selected() {
        let item = Item::with_id(1987, "bag");
        assert!(!item.is_selected());
        assert_eq!(item.client_id, 1987);
    }

    #[test]
    fn label_joins_id_and_name() {
        assert_eq!(Item::with_id(2160, "crystal coin").label(), "2160 - crystal coin");
    }

    #[test]
    fn raw_brush_requires_real_item_type() {
        assert_eq!(
            Item::with_id(1987, "bag").raw_brush(),
            Some(BrushRef::Raw(ItemId(1987)))
        );
        assert_eq!(Item::new(ItemId::NONE, 0, "void").raw_brush(), None);
    }
}
