//! Display-ordered view over the items of one tile.
//!
//! The inspector lists a tile top of stack first with the ground, if any, as
//! the last row. Storage order on [`Tile::items`] is the reverse of display
//! order, so display row `i` of `n` stacked items maps to storage index
//! `n - 1 - i`.
//!
//! [`TileItemList`] never caches item references. It stores [`Slot`]s that
//! point back into the tile and is rebuilt after every structural edit.
//!
//! Invalid gestures (empty selection, boundary rows, moving the ground) are
//! answered with a no-op rather than an error.

use tracing::debug;

use crate::item::Item;
use crate::selection::Selection;
use crate::tile::Tile;

/// Where a display row's item lives on the tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Index into [`Tile::items`].
    Stacked(usize),
    Ground,
}

/// Which list actions are currently possible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ListControls {
    pub delete: bool,
    pub select_raw: bool,
    pub move_up: bool,
    pub move_down: bool,
}

/// Display projection of a tile's item stack.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TileItemList {
    slots: Vec<Slot>,
}

impl TileItemList {
    /// Projects `tile` into display order: top of stack first, ground last.
    pub fn build(tile: &Tile) -> Self {
        let mut list = Self::default();
        list.rebuild(tile);
        list
    }

    fn rebuild(&mut self, tile: &Tile) {
        self.slots.clear();
        self.slots
            .extend((0..tile.items.len()).rev().map(Slot::Stacked));
        if tile.ground.is_some() {
            self.slots.push(Slot::Ground);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_ground(&self, index: usize) -> bool {
        self.slot(index) == Some(Slot::Ground)
    }

    /// Resolves display row `index` against `tile`.
    pub fn item<'t>(&self, tile: &'t Tile, index: usize) -> Option<&'t Item> {
        match self.slot(index)? {
            Slot::Stacked(storage) => tile.items.get(storage),
            Slot::Ground => tile.ground.as_ref(),
        }
    }

    fn item_mut<'t>(&self, tile: &'t mut Tile, index: usize) -> Option<&'t mut Item> {
        match self.slot(index)? {
            Slot::Stacked(storage) => tile.items.get_mut(storage),
            Slot::Ground => tile.ground.as_mut(),
        }
    }

    /// Items in display order.
    pub fn iter<'a, 't: 'a>(&'a self, tile: &'t Tile) -> impl Iterator<Item = &'t Item> + 'a {
        (0..self.len()).filter_map(move |index| self.item(tile, index))
    }

    /// Mirrors the row selection onto the items' own selection flags.
    pub fn sync_selection(&self, tile: &mut Tile, selection: &Selection) {
        for index in 0..self.len() {
            if let Some(item) = self.item_mut(tile, index) {
                if selection.contains(index) {
                    item.select();
                } else {
                    item.deselect();
                }
            }
        }
    }

    /// The item the tile considers topmost among the selected rows.
    ///
    /// With several rows selected the tile breaks the tie, not display order.
    pub fn selected_item<'t>(&self, tile: &'t mut Tile, selection: &Selection) -> Option<&'t Item> {
        if self.is_empty() || selection.is_empty() {
            return None;
        }
        self.sync_selection(tile, selection);
        tile.top_selected_item()
    }

    /// Detaches every selected item from `tile` and returns them to the caller.
    ///
    /// The list is rebuilt and the selection cleared. Nothing happens when the
    /// list or the selection is empty.
    pub fn remove_selected(&mut self, tile: &mut Tile, selection: &mut Selection) -> Vec<Item> {
        if self.is_empty() || selection.is_empty() {
            return Vec::new();
        }

        self.sync_selection(tile, selection);
        let removed = tile.pop_selected_items();

        self.rebuild(tile);
        selection.clear();

        debug!(
            removed = removed.len(),
            remaining = self.len(),
            "removed selected items from tile"
        );
        removed
    }

    /// Moves the single selected row one place up the list (toward the top of
    /// the stack). The selection follows the item.
    pub fn move_selected_up(&mut self, tile: &mut Tile, selection: &mut Selection) -> bool {
        let Some(index) = self.movable_row(selection) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        let Some(Slot::Stacked(storage)) = self.slot(index) else {
            return false;
        };
        if !tile.swap_items(storage, storage + 1) {
            return false;
        }

        self.rebuild(tile);
        selection.set_single(index - 1);
        debug!(from = index, to = index - 1, "moved item up");
        true
    }

    /// Moves the single selected row one place down the list (toward the
    /// bottom of the stack). The selection follows the item.
    ///
    /// The ground never moves, so an item directly above it stays put.
    pub fn move_selected_down(&mut self, tile: &mut Tile, selection: &mut Selection) -> bool {
        let Some(index) = self.movable_row(selection) else {
            return false;
        };
        if index + 1 >= self.len() {
            return false;
        }
        let Some(Slot::Stacked(storage)) = self.slot(index) else {
            return false;
        };
        if !matches!(self.slot(index + 1), Some(Slot::Stacked(_))) {
            return false;
        }
        if storage == 0 || !tile.swap_items(storage, storage - 1) {
            return false;
        }

        self.rebuild(tile);
        selection.set_single(index + 1);
        debug!(from = index, to = index + 1, "moved item down");
        true
    }

    fn movable_row(&self, selection: &Selection) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        selection.single().filter(|&index| index < self.len())
    }

    pub fn can_delete(&self, selection: &Selection) -> bool {
        !selection.is_empty()
    }

    pub fn can_select_raw(&self, selection: &Selection) -> bool {
        selection.count() == 1
    }

    pub fn can_move_up(&self, selection: &Selection) -> bool {
        selection
            .single()
            .is_some_and(|index| index > 0 && index < self.len() && !self.is_ground(index))
    }

    pub fn can_move_down(&self, selection: &Selection) -> bool {
        selection
            .single()
            .is_some_and(|index| index + 1 < self.len())
    }

    /// Evaluates every control predicate at once.
    pub fn controls(&self, selection: &Selection) -> ListControls {
        ListControls {
            delete: self.can_delete(selection),
            select_raw: self.can_select_raw(selection),
            move_up: self.can_move_up(selection),
            move_down: self.can_move_down(selection),
        }
    }
}
