//! Creature palette: picks creature and spawn brushes.
//!
//! Creatures are grouped into named tilesets. The palette tracks the current
//! tileset, the chosen creature, a search filter, and the parameters the
//! spawn brush paints with. Brushes are handed out as [`BrushRef`]s.

use tracing::{debug, info};

use crate::brush::BrushRef;
use crate::error::PaletteError;

/// Seconds between respawns. `0` is not a valid interval.
pub const SPAWN_TIME_RANGE: (u32, u32) = (1, 86_400);
pub const DEFAULT_SPAWN_TIME: u32 = 60;

/// Spawn radius in tiles.
pub const SPAWN_SIZE_RANGE: (u32, u32) = (1, 50);
pub const DEFAULT_SPAWN_SIZE: u32 = 3;

/// Whether a creature is a monster or an NPC.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CreatureKind {
    #[default]
    Monster,
    Npc,
}

/// A creature type that can be placed with a creature brush.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureType {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: CreatureKind,
    /// Outfit sprite id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub look_type: u16,
}

impl CreatureType {
    pub fn new(name: impl Into<String>, kind: CreatureKind, look_type: u16) -> Self {
        Self {
            name: name.into(),
            kind,
            look_type,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

/// A named group of creatures shown together.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tileset {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub creatures: Vec<CreatureType>,
}

impl Tileset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creatures: Vec::new(),
        }
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.creatures.iter().position(|c| c.name == name)
    }
}

/// Which of the two palette brushes is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum BrushMode {
    #[default]
    Creature,
    Spawn,
}

/// Selection state of the creature palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreaturePalette {
    tilesets: Vec<Tileset>,
    tileset: Option<usize>,
    /// Chosen creature by name, so it survives filter changes.
    creature: Option<String>,
    filter: String,
    mode: BrushMode,
    spawn_time: u32,
    spawn_size: u32,
}

impl Default for CreaturePalette {
    fn default() -> Self {
        Self {
            tilesets: Vec::new(),
            tileset: None,
            creature: None,
            filter: String::new(),
            mode: BrushMode::Creature,
            spawn_time: DEFAULT_SPAWN_TIME,
            spawn_size: DEFAULT_SPAWN_SIZE,
        }
    }
}

impl CreaturePalette {
    pub fn new(tilesets: Vec<Tileset>) -> Self {
        let mut palette = Self {
            tilesets,
            ..Self::default()
        };
        palette.select_first_brush();
        palette
    }

    pub fn tilesets(&self) -> &[Tileset] {
        &self.tilesets
    }

    pub fn selected_tileset_index(&self) -> Option<usize> {
        self.tileset
    }

    pub fn selected_tileset(&self) -> Option<&Tileset> {
        self.tilesets.get(self.tileset?)
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn spawn_time(&self) -> u32 {
        self.spawn_time
    }

    pub fn spawn_size(&self) -> u32 {
        self.spawn_size
    }

    /// Creatures of the current tileset that pass the search filter.
    pub fn visible_creatures(&self) -> Vec<&CreatureType> {
        let needle = self.filter.trim().to_lowercase();
        self.selected_tileset()
            .map(|tileset| {
                tileset
                    .creatures
                    .iter()
                    .filter(|creature| creature.matches(&needle))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Row of the chosen creature within [`Self::visible_creatures`].
    pub fn selected_creature_index(&self) -> Option<usize> {
        let name = self.creature.as_deref()?;
        self.visible_creatures()
            .iter()
            .position(|creature| creature.name == name)
    }

    pub fn selected_creature(&self) -> Option<&CreatureType> {
        let name = self.creature.as_deref()?;
        self.visible_creatures()
            .into_iter()
            .find(|creature| creature.name == name)
    }

    /// Selects the first tileset and its first creature in creature mode.
    pub fn select_first_brush(&mut self) {
        self.filter.clear();
        self.mode = BrushMode::Creature;
        self.tileset = (!self.tilesets.is_empty()).then_some(0);
        self.select_first_visible();
    }

    fn select_first_visible(&mut self) {
        self.creature = self
            .visible_creatures()
            .first()
            .map(|creature| creature.name.clone());
    }

    pub fn select_tileset(&mut self, index: usize) -> Result<(), PaletteError> {
        if index >= self.tilesets.len() {
            return Err(PaletteError::UnknownTileset(index));
        }
        if self.tileset != Some(index) {
            self.tileset = Some(index);
            self.select_first_visible();
            debug!(tileset = %self.tilesets[index].name, "switched creature tileset");
        }
        Ok(())
    }

    /// Picks the creature at `index` of the visible list.
    pub fn select_creature(&mut self, index: usize) -> bool {
        let Some(name) = self
            .visible_creatures()
            .get(index)
            .map(|creature| creature.name.clone())
        else {
            return false;
        };
        self.creature = Some(name);
        self.mode = BrushMode::Creature;
        true
    }

    pub fn select_creature_by_name(&mut self, name: &str) -> Result<(), PaletteError> {
        let index = self
            .visible_creatures()
            .iter()
            .position(|creature| creature.name == name)
            .ok_or_else(|| PaletteError::UnknownCreature(name.to_owned()))?;
        self.select_creature(index);
        Ok(())
    }

    pub fn set_brush_mode(&mut self, mode: BrushMode) {
        self.mode = mode;
    }

    /// The brush the editor should paint with, if any.
    pub fn selected_brush(&self) -> Option<BrushRef> {
        match self.mode {
            BrushMode::Spawn => Some(BrushRef::Spawn),
            BrushMode::Creature => self
                .selected_creature()
                .map(|creature| BrushRef::Creature(creature.name.clone())),
        }
    }

    /// Points the palette at `brush`, switching tileset if needed.
    ///
    /// Returns `false` for brushes this palette does not own.
    pub fn select_brush(&mut self, brush: &BrushRef) -> bool {
        match brush {
            BrushRef::Spawn => {
                self.mode = BrushMode::Spawn;
                true
            }
            BrushRef::Creature(name) => {
                let found = self
                    .tilesets
                    .iter()
                    .position(|tileset| tileset.position_of(name).is_some());
                let Some(tileset) = found else {
                    return false;
                };
                self.tileset = Some(tileset);
                if !self.visible_creatures().iter().any(|c| &c.name == name) {
                    self.filter.clear();
                }
                self.creature = Some(name.clone());
                self.mode = BrushMode::Creature;
                true
            }
            BrushRef::Raw(_) => false,
        }
    }

    /// Narrows the visible creatures to names containing `text`, ignoring case.
    ///
    /// The text is kept as typed; surrounding whitespace is ignored when
    /// matching.
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_owned();
        if self.selected_creature_index().is_none() {
            self.select_first_visible();
        }
    }

    pub fn set_spawn_time(&mut self, seconds: u32) -> Result<(), PaletteError> {
        let (min, max) = SPAWN_TIME_RANGE;
        if !(min..=max).contains(&seconds) {
            return Err(PaletteError::SpawnTimeOutOfRange {
                value: seconds,
                min,
                max,
            });
        }
        self.spawn_time = seconds;
        Ok(())
    }

    pub fn set_spawn_size(&mut self, size: u32) -> Result<(), PaletteError> {
        let (min, max) = SPAWN_SIZE_RANGE;
        if !(min..=max).contains(&size) {
            return Err(PaletteError::SpawnSizeOutOfRange {
                value: size,
                min,
                max,
            });
        }
        self.spawn_size = size;
        Ok(())
    }

    /// Follows the editor's global brush size, clamped to the spawn range.
    pub fn on_update_brush_size(&mut self, size: u32) {
        let (min, max) = SPAWN_SIZE_RANGE;
        self.spawn_size = size.clamp(min, max);
    }

    /// Merges `creatures` into the tileset called `tileset_name`, creating it
    /// if needed. Creatures already present by name are skipped.
    ///
    /// Returns how many creatures were added.
    pub fn add_creatures(
        &mut self,
        tileset_name: &str,
        creatures: impl IntoIterator<Item = CreatureType>,
    ) -> usize {
        let index = match self.tilesets.iter().position(|t| t.name == tileset_name) {
            Some(index) => index,
            None => {
                self.tilesets.push(Tileset::new(tileset_name));
                self.tilesets.len() - 1
            }
        };

        let tileset = &mut self.tilesets[index];
        let mut added = 0;
        for creature in creatures {
            if tileset.position_of(&creature.name).is_none() {
                tileset.creatures.push(creature);
                added += 1;
            }
        }

        if self.tileset.is_none() {
            self.tileset = Some(index);
        }
        if self.creature.is_none() {
            self.select_first_visible();
        }

        info!(tileset = tileset_name, added, "loaded creatures into palette");
        added
    }

    /// Removes every tileset and resets the selection.
    pub fn purge_creatures(&mut self) {
        let purged = self.tilesets.len();
        self.tilesets.clear();
        self.tileset = None;
        self.creature = None;
        self.filter.clear();
        info!(tilesets = purged, "purged creature palette");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monsters() -> Tileset {
        Tileset {
            name: "Monsters".into(),
            creatures: vec![
                CreatureType::new("Rat", CreatureKind::Monster, 21),
                CreatureType::new("Cave Rat", CreatureKind::Monster, 56),
                CreatureType::new("Dragon", CreatureKind::Monster, 34),
            ],
        }
    }

    fn npcs() -> Tileset {
        Tileset {
            name: "NPCs".into(),
            creatures: vec![CreatureType::new("Sam", CreatureKind::Npc, 131)],
        }
    }

    fn palette() -> CreaturePalette {
        CreaturePalette::new(vec![monsters(), npcs()])
    }

    #[test]
    fn new_selects_first_brush() {
        let palette = palette();
        assert_eq!(palette.selected_tileset_index(), Some(0));
        assert_eq!(
            palette.selected_brush(),
            Some(BrushRef::Creature("Rat".into()))
        );
        assert_eq!(palette.spawn_time(), DEFAULT_SPAWN_TIME);
        assert_eq!(palette.spawn_size(), DEFAULT_SPAWN_SIZE);
    }

    #[test]
    fn empty_palette_has_no_brush() {
        let palette = CreaturePalette::default();
        assert_eq!(palette.selected_brush(), None);
        assert!(palette.visible_creatures().is_empty());
    }

    #[test]
    fn spawn_mode_yields_spawn_brush() {
        let mut palette = palette();
        palette.set_brush_mode(BrushMode::Spawn);
        assert_eq!(palette.selected_brush(), Some(BrushRef::Spawn));
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut palette = palette();
        palette.set_filter("RAT");
        let names: Vec<_> = palette
            .visible_creatures()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Rat", "Cave Rat"]);
        assert_eq!(palette.selected_creature_index(), Some(0));

        palette.set_filter("drag");
        assert_eq!(
            palette.selected_brush(),
            Some(BrushRef::Creature("Dragon".into()))
        );

        palette.set_filter("");
        assert_eq!(palette.visible_creatures().len(), 3);
        assert_eq!(palette.selected_creature_index(), Some(2));
    }

    #[test]
    fn filter_typed_one_key_at_a_time_keeps_spaces() {
        let mut palette = palette();
        let mut typed = String::new();
        for ch in "cave r".chars() {
            typed.push(ch);
            palette.set_filter(&typed);
            typed = palette.filter().to_owned();
        }

        assert_eq!(palette.filter(), "cave r");
        let names: Vec<_> = palette
            .visible_creatures()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Cave Rat"]);
        assert_eq!(
            palette.selected_brush(),
            Some(BrushRef::Creature("Cave Rat".into()))
        );
    }

    #[test]
    fn select_brush_switches_tileset() {
        let mut palette = palette();
        palette.set_filter("rat");

        assert!(palette.select_brush(&BrushRef::Creature("Sam".into())));
        assert_eq!(palette.selected_tileset().unwrap().name, "NPCs");
        assert_eq!(palette.filter(), "");
        assert_eq!(palette.mode(), BrushMode::Creature);

        assert!(!palette.select_brush(&BrushRef::Creature("Nobody".into())));
        assert!(!palette.select_brush(&BrushRef::Raw(crate::ItemId(100))));
    }

    #[test]
    fn select_tileset_rejects_unknown_index() {
        let mut palette = palette();
        assert_eq!(
            palette.select_tileset(5),
            Err(PaletteError::UnknownTileset(5))
        );
        palette.select_tileset(1).unwrap();
        assert_eq!(palette.selected_creature().unwrap().name, "Sam");
    }

    #[test]
    fn select_creature_by_name_searches_visible_list() {
        let mut palette = palette();
        palette.select_creature_by_name("Dragon").unwrap();
        assert_eq!(palette.selected_creature_index(), Some(2));
        assert!(matches!(
            palette.select_creature_by_name("Sam"),
            Err(PaletteError::UnknownCreature(_))
        ));
    }

    #[test]
    fn spawn_parameters_are_bounded() {
        let mut palette = palette();
        assert!(palette.set_spawn_time(0).is_err());
        assert!(palette.set_spawn_time(86_401).is_err());
        palette.set_spawn_time(120).unwrap();
        assert_eq!(palette.spawn_time(), 120);

        assert!(matches!(
            palette.set_spawn_size(51),
            Err(PaletteError::SpawnSizeOutOfRange { value: 51, .. })
        ));
        palette.set_spawn_size(5).unwrap();
        assert_eq!(palette.spawn_size(), 5);

        palette.on_update_brush_size(0);
        assert_eq!(palette.spawn_size(), 1);
        palette.on_update_brush_size(99);
        assert_eq!(palette.spawn_size(), 50);
    }

    #[test]
    fn add_creatures_skips_duplicates() {
        let mut palette = CreaturePalette::default();
        let added = palette.add_creatures(
            "NPCs",
            vec![
                CreatureType::new("Sam", CreatureKind::Npc, 131),
                CreatureType::new("Sam", CreatureKind::Npc, 131),
                CreatureType::new("Frodo", CreatureKind::Npc, 128),
            ],
        );
        assert_eq!(added, 2);
        assert_eq!(palette.selected_brush(), Some(BrushRef::Creature("Sam".into())));

        let added = palette.add_creatures("NPCs", vec![CreatureType::new("Frodo", CreatureKind::Npc, 128)]);
        assert_eq!(added, 0);
    }

    #[test]
    fn purge_resets_selection() {
        let mut palette = palette();
        palette.purge_creatures();
        assert!(palette.tilesets().is_empty());
        assert_eq!(palette.selected_tileset_index(), None);
        assert_eq!(palette.selected_brush(), None);
    }
}
