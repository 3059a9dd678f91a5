//! Tile inspector dialog controller.
//!
//! Holds the state behind the "browse field" dialog: the item list of one
//! tile, the row selection, which buttons are enabled, and the summary labels.
//! Frontends feed user gestures in as [`InspectorCommand`]s and redraw from
//! the accessors. The dialog has exclusive access to its tile while open.

use map_core::{BrushRef, ListControls, Selection, Tile, TileFlags, TileItemList};
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// User gestures understood by the inspector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InspectorCommand {
    /// Select only this row.
    SelectOnly(usize),
    /// Add or remove this row from the selection.
    ToggleSelect(usize),
    ClearSelection,
    Delete,
    /// Close the dialog and activate the selected item's RAW brush.
    SelectRaw,
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
}

/// How the modal dialog ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InspectorOutcome {
    Confirmed { brush: Option<BrushRef> },
    Cancelled,
}

impl InspectorOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }
}

/// Read-only tile facts listed under the item list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum TileFact {
    #[strum(serialize = "Protection zone")]
    ProtectionZone,
    #[strum(serialize = "No PvP")]
    NoPvp,
    #[strum(serialize = "No logout")]
    NoLogout,
    #[strum(serialize = "PvP zone")]
    PvpZone,
    #[strum(serialize = "House")]
    House,
    #[strum(serialize = "Zone brush")]
    ZoneBrush,
}

impl TileFact {
    pub fn holds(self, tile: &Tile) -> bool {
        match self {
            Self::ProtectionZone => tile.is_pz(),
            Self::NoPvp => tile.has_flag(TileFlags::NO_PVP),
            Self::NoLogout => tile.has_flag(TileFlags::NO_LOGOUT),
            Self::PvpZone => tile.has_flag(TileFlags::PVP_ZONE),
            Self::House => tile.is_house_tile(),
            Self::ZoneBrush => tile.has_flag(TileFlags::ZONE_BRUSH),
        }
    }
}

/// One rendered list row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectorRow {
    pub label: String,
    pub client_id: u16,
    pub selected: bool,
    pub ground: bool,
}

/// State of an open inspector dialog.
pub struct TileInspector<'t> {
    tile: &'t mut Tile,
    list: TileItemList,
    selection: Selection,
    cursor: usize,
    deleted: usize,
}

impl<'t> TileInspector<'t> {
    pub fn open(tile: &'t mut Tile) -> Self {
        let list = TileItemList::build(tile);
        info!(position = %tile.position, items = list.len(), "opened tile inspector");
        Self {
            tile,
            list,
            selection: Selection::new(),
            cursor: 0,
            deleted: 0,
        }
    }

    pub fn tile(&self) -> &Tile {
        self.tile
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Focused row for keyboard navigation.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.list.len() {
            self.cursor += 1;
        }
    }

    /// Number of items deleted since the dialog opened.
    pub fn deleted_count(&self) -> usize {
        self.deleted
    }

    pub fn controls(&self) -> ListControls {
        self.list.controls(&self.selection)
    }

    pub fn rows(&self) -> Vec<InspectorRow> {
        (0..self.list.len())
            .filter_map(|index| {
                let item = self.list.item(self.tile, index)?;
                Some(InspectorRow {
                    label: item.label(),
                    client_id: item.client_id,
                    selected: self.selection.contains(index),
                    ground: self.list.is_ground(index),
                })
            })
            .collect()
    }

    pub fn position_label(&self) -> String {
        format!("Position:  {}", self.tile.position)
    }

    pub fn item_count_label(&self) -> String {
        format!("Item count:  {}", self.list.len())
    }

    /// Yes/no rows for every [`TileFact`].
    pub fn fact_labels(&self) -> Vec<String> {
        TileFact::iter()
            .map(|fact| format!("{fact}:  {}", yes_no(fact.holds(self.tile))))
            .collect()
    }

    /// Applies `command`. Returns `Some` once the dialog should close.
    ///
    /// Commands whose button is disabled are ignored.
    pub fn handle(&mut self, command: InspectorCommand) -> Option<InspectorOutcome> {
        let controls = self.controls();
        match command {
            InspectorCommand::SelectOnly(index) => {
                if index < self.list.len() {
                    self.selection.set_single(index);
                    self.cursor = index;
                }
            }
            InspectorCommand::ToggleSelect(index) => {
                if index < self.list.len() {
                    self.selection.toggle(index);
                    self.cursor = index;
                }
            }
            InspectorCommand::ClearSelection => self.selection.clear(),
            InspectorCommand::Delete if controls.delete => self.delete_selected(),
            InspectorCommand::SelectRaw if controls.select_raw => {
                let brush = self
                    .list
                    .selected_item(self.tile, &self.selection)
                    .and_then(|item| item.raw_brush());
                self.close();
                return Some(InspectorOutcome::Confirmed { brush });
            }
            InspectorCommand::MoveUp if controls.move_up => {
                if self.list.move_selected_up(self.tile, &mut self.selection) {
                    self.follow_selection();
                }
            }
            InspectorCommand::MoveDown if controls.move_down => {
                if self.list.move_selected_down(self.tile, &mut self.selection) {
                    self.follow_selection();
                }
            }
            InspectorCommand::Confirm => {
                self.close();
                return Some(InspectorOutcome::Confirmed { brush: None });
            }
            InspectorCommand::Cancel => {
                self.close();
                return Some(InspectorOutcome::Cancelled);
            }
            _ => debug!(?command, "ignored disabled inspector command"),
        }
        None
    }

    fn delete_selected(&mut self) {
        let removed = self.list.remove_selected(self.tile, &mut self.selection);
        self.deleted += removed.len();
        self.cursor = self.cursor.min(self.list.len().saturating_sub(1));
        info!(
            deleted = removed.len(),
            position = %self.tile.position,
            "deleted items from tile"
        );
    }

    fn follow_selection(&mut self) {
        if let Some(index) = self.selection.single() {
            self.cursor = index;
        }
    }

    fn close(&mut self) {
        self.tile.deselect_all();
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
