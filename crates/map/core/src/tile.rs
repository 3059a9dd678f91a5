//! Map tiles and their item stacks.

use core::fmt;

use bitflags::bitflags;

use crate::item::Item;

/// Absolute tile coordinate. `z` is the floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: u16,
    pub y: u16,
    pub z: u8,
}

impl Position {
    pub const fn new(x: u16, y: u16, z: u8) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={},  y={},  z={}", self.x, self.y, self.z)
    }
}

bitflags! {
    /// Zone flags painted onto a tile by the editor.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        const PROTECTION_ZONE = 1 << 0;
        const NO_PVP          = 1 << 1;
        const NO_LOGOUT       = 1 << 2;
        const PVP_ZONE        = 1 << 3;
        const ZONE_BRUSH      = 1 << 4;
    }
}

/// One map cell: an optional ground plus the items stacked on it.
///
/// `items` is kept in placement order, so the last element is the top of the
/// stack. The ground is stored apart from the stack and can never appear in
/// `items`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Tile {
    pub position: Position,
    pub ground: Option<Item>,
    pub items: Vec<Item>,
    pub flags: TileFlags,
    pub house_id: Option<u32>,
}

impl Tile {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ground(mut self, ground: Item) -> Self {
        self.ground = Some(ground);
        self
    }

    /// Places `item` on top of the stack.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: TileFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_house(mut self, house_id: u32) -> Self {
        self.house_id = Some(house_id);
        self
    }

    /// Number of items including the ground.
    pub fn item_count(&self) -> usize {
        self.items.len() + usize::from(self.ground.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    pub fn is_pz(&self) -> bool {
        self.flags.contains(TileFlags::PROTECTION_ZONE)
    }

    pub fn is_house_tile(&self) -> bool {
        self.house_id.is_some()
    }

    pub fn has_flag(&self, flag: TileFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Topmost selected item: stacked items are scanned from the top down and
    /// the ground is only considered when no stacked item is selected.
    pub fn top_selected_item(&self) -> Option<&Item> {
        self.items
            .iter()
            .rev()
            .find(|item| item.is_selected())
            .or_else(|| self.ground.as_ref().filter(|ground| ground.is_selected()))
    }

    /// Detaches every selected item and hands ownership to the caller.
    ///
    /// The ground comes first when selected, followed by stacked items from
    /// the bottom of the stack up.
    pub fn pop_selected_items(&mut self) -> Vec<Item> {
        let mut popped = Vec::new();

        if self.ground.as_ref().is_some_and(Item::is_selected) {
            popped.extend(self.ground.take());
        }

        let (selected, kept): (Vec<_>, Vec<_>) =
            self.items.drain(..).partition(Item::is_selected);
        self.items = kept;
        popped.extend(selected);

        for item in &mut popped {
            item.deselect();
        }
        popped
    }

    /// Swaps two stacked items by storage index.
    ///
    /// Returns `false` without touching the stack if either index is out of range.
    pub fn swap_items(&mut self, a: usize, b: usize) -> bool {
        if a >= self.items.len() || b >= self.items.len() {
            return false;
        }
        self.items.swap(a, b);
        true
    }

    pub fn deselect_all(&mut self) {
        if let Some(ground) = self.ground.as_mut() {
            ground.deselect();
        }
        for item in &mut self.items {
            item.deselect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tile() -> Tile {
        Tile::new(Position::new(100, 200, 7))
            .with_ground(Item::with_id(4526, "grass"))
            .with_item(Item::with_id(1, "a"))
            .with_item(Item::with_id(2, "b"))
            .with_item(Item::with_id(3, "c"))
    }

    #[test]
    fn item_count_includes_ground() {
        assert_eq!(sample_tile().item_count(), 4);
        assert_eq!(Tile::default().item_count(), 0);
        assert!(Tile::default().is_empty());
    }

    #[test]
    fn top_selected_prefers_top_of_stack() {
        let mut tile = sample_tile();
        tile.items[0].select();
        tile.items[1].select();
        tile.ground.as_mut().unwrap().select();

        assert_eq!(tile.top_selected_item().unwrap().name, "b");
    }

    #[test]
    fn top_selected_falls_back_to_ground() {
        let mut tile = sample_tile();
        assert!(tile.top_selected_item().is_none());

        tile.ground.as_mut().unwrap().select();
        assert_eq!(tile.top_selected_item().unwrap().name, "grass");
    }

    #[test]
    fn pop_selected_detaches_ground_and_stack_items() {
        let mut tile = sample_tile();
        tile.items[0].select();
        tile.items[2].select();
        tile.ground.as_mut().unwrap().select();

        let popped = tile.pop_selected_items();
        let names: Vec<_> = popped.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(names, ["grass", "a", "c"]);
        assert!(popped.iter().all(|i| !i.is_selected()));
        assert!(tile.ground.is_none());
        assert_eq!(tile.items.len(), 1);
        assert_eq!(tile.items[0].name, "b");
    }

    #[test]
    fn swap_items_rejects_out_of_range() {
        let mut tile = sample_tile();
        assert!(!tile.swap_items(2, 3));
        assert!(tile.swap_items(0, 2));
        assert_eq!(tile.items[0].name, "c");
        assert_eq!(tile.items[2].name, "a");
    }

    #[test]
    fn flags_are_queried_individually() {
        let tile = Tile::new(Position::default())
            .with_flags(TileFlags::PROTECTION_ZONE | TileFlags::NO_LOGOUT)
            .with_house(12);

        assert!(tile.is_pz());
        assert!(tile.has_flag(TileFlags::NO_LOGOUT));
        assert!(!tile.has_flag(TileFlags::PVP_ZONE));
        assert!(tile.is_house_tile());
    }

    #[test]
    fn position_display_matches_inspector_format() {
        assert_eq!(Position::new(1, 2, 3).to_string(), "x=1,  y=2,  z=3");
    }
}
