//! Creature palette gestures.

use std::path::PathBuf;

use client_frontend_core::{InspectorCommand, InspectorOutcome};
use map_content::CreatureFolderLoader;
use map_core::{BrushMode, CreaturePalette, EditorError, ErrorSeverity, PaletteError};

use super::super::EventLoop;
use crate::input::PaletteAction;

type FolderLoad = fn(&mut CreaturePalette, &std::path::Path) -> map_content::LoadResult<usize>;

impl EventLoop<'_> {
    pub(in crate::event) fn handle_palette_action(
        &mut self,
        action: PaletteAction,
    ) -> Option<InspectorOutcome> {
        match action {
            PaletteAction::PrevCreature => self.step_creature(-1),
            PaletteAction::NextCreature => self.step_creature(1),
            PaletteAction::PrevTileset => self.step_tileset(-1),
            PaletteAction::NextTileset => self.step_tileset(1),
            PaletteAction::ToggleSpawnMode => {
                let mode = match self.palette.mode() {
                    BrushMode::Creature => BrushMode::Spawn,
                    BrushMode::Spawn => BrushMode::Creature,
                };
                self.palette.set_brush_mode(mode);
            }
            PaletteAction::SpawnTime(delta) => {
                let value = offset(self.palette.spawn_time(), delta);
                if let Err(e) = self.palette.set_spawn_time(value) {
                    self.report_palette_error(&e);
                }
            }
            PaletteAction::SpawnSize(delta) => {
                let value = offset(self.palette.spawn_size(), delta);
                if let Err(e) = self.palette.set_spawn_size(value) {
                    self.report_palette_error(&e);
                }
            }
            PaletteAction::StartSearch => self.app_state.start_search(),
            PaletteAction::SearchInput(ch) => {
                let mut filter = self.palette.filter().to_owned();
                filter.push(ch);
                self.palette.set_filter(&filter);
            }
            PaletteAction::SearchBackspace => {
                let mut filter = self.palette.filter().to_owned();
                filter.pop();
                self.palette.set_filter(&filter);
            }
            PaletteAction::EndSearch => self.app_state.end_search(),
            PaletteAction::Purge => {
                self.palette.purge_creatures();
                self.messages.info("Purged all creatures from the palette");
            }
            PaletteAction::LoadNpcs => {
                let dir = self.cli_config.folders.npcs.clone();
                self.load_folder(dir, "NPC", CreatureFolderLoader::load_npcs);
            }
            PaletteAction::LoadMonsters => {
                let dir = self.cli_config.folders.monsters.clone();
                self.load_folder(dir, "monster", CreatureFolderLoader::load_monsters);
            }
            PaletteAction::UseBrush => return self.use_palette_brush(),
        }
        None
    }

    fn step_creature(&mut self, step: isize) {
        let count = self.palette.visible_creatures().len();
        if count == 0 {
            return;
        }
        let next = match self.palette.selected_creature_index() {
            Some(index) => index.saturating_add_signed(step).min(count - 1),
            None => 0,
        };
        self.palette.select_creature(next);
    }

    fn step_tileset(&mut self, step: isize) {
        let count = self.palette.tilesets().len();
        if count == 0 {
            return;
        }
        let current = self.palette.selected_tileset_index().unwrap_or(0);
        let next = current.saturating_add_signed(step).min(count - 1);
        if let Err(e) = self.palette.select_tileset(next) {
            self.report_palette_error(&e);
        }
    }

    /// Rejected values are warnings; lookups of missing entries are errors.
    pub(in crate::event) fn report_palette_error(&mut self, error: &PaletteError) {
        tracing::warn!(
            code = error.error_code(),
            severity = error.severity().as_str(),
            "{}",
            error
        );
        match error.severity() {
            ErrorSeverity::Validation => self.messages.warn(error.to_string()),
            ErrorSeverity::NotFound => self.messages.error(error.to_string()),
        }
    }

    fn load_folder(&mut self, dir: Option<PathBuf>, what: &str, load: FolderLoad) {
        let Some(dir) = dir else {
            self.messages.warn(format!("No {what} folder configured"));
            return;
        };
        match load(&mut self.palette, &dir) {
            Ok(added) => self
                .messages
                .info(format!("Loaded {added} {what}(s) from {}", dir.display())),
            Err(e) => {
                tracing::warn!("Failed to load {} folder: {:#}", what, e);
                self.messages.error(format!("{e:#}"));
            }
        }
    }

    /// Closes the dialog, keeping the tile edits, with the palette's brush.
    fn use_palette_brush(&mut self) -> Option<InspectorOutcome> {
        let Some(brush) = self.palette.selected_brush() else {
            self.messages.warn("No creature selected");
            return None;
        };
        self.inspector.handle(InspectorCommand::Confirm)?;
        Some(InspectorOutcome::Confirmed { brush: Some(brush) })
    }
}

/// Adds a signed step to an unsigned setting; results below zero become zero
/// so the palette can reject them.
fn offset(value: u32, delta: i64) -> u32 {
    u32::try_from(i64::from(value) + delta).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use client_frontend_core::MessageLevel;
    use map_core::{BrushRef, palette::DEFAULT_SPAWN_TIME};

    use super::*;
    use crate::event::handlers::testing;

    #[test]
    fn arrows_walk_creatures_and_tilesets() {
        let mut tile = testing::tile();
        let mut event_loop = testing::event_loop(&mut tile);

        event_loop.handle_palette_action(PaletteAction::NextCreature);
        assert_eq!(event_loop.palette.selected_creature().unwrap().name, "Cave Rat");
        event_loop.handle_palette_action(PaletteAction::PrevCreature);
        event_loop.handle_palette_action(PaletteAction::PrevCreature);
        assert_eq!(event_loop.palette.selected_creature().unwrap().name, "Rat");

        event_loop.handle_palette_action(PaletteAction::NextTileset);
        event_loop.handle_palette_action(PaletteAction::NextTileset);
        assert_eq!(event_loop.palette.selected_tileset().unwrap().name, "NPCs");
        assert_eq!(event_loop.palette.selected_creature().unwrap().name, "Sam");
    }

    #[test]
    fn spawn_time_out_of_range_is_reported() {
        let mut tile = testing::tile();
        let mut event_loop = testing::event_loop(&mut tile);

        event_loop.handle_palette_action(PaletteAction::SpawnTime(10));
        assert_eq!(event_loop.palette.spawn_time(), DEFAULT_SPAWN_TIME + 10);

        event_loop.handle_palette_action(PaletteAction::SpawnTime(-1000));
        assert_eq!(event_loop.palette.spawn_time(), DEFAULT_SPAWN_TIME + 10);
        let latest = event_loop.messages.recent(1).next().unwrap();
        assert_eq!(latest.level, MessageLevel::Warning);
    }

    #[test]
    fn search_narrows_creatures() {
        let mut tile = testing::tile();
        let mut event_loop = testing::event_loop(&mut tile);

        for ch in "drag".chars() {
            event_loop.handle_palette_action(PaletteAction::SearchInput(ch));
        }
        assert_eq!(event_loop.palette.visible_creatures().len(), 1);
        assert_eq!(event_loop.palette.selected_creature().unwrap().name, "Dragon");

        for _ in 0..4 {
            event_loop.handle_palette_action(PaletteAction::SearchBackspace);
        }
        assert_eq!(event_loop.palette.visible_creatures().len(), 3);
    }

    #[test]
    fn typed_search_keeps_spaces() {
        let mut tile = testing::tile();
        let mut event_loop = testing::event_loop(&mut tile);

        for ch in "cave r".chars() {
            event_loop.handle_palette_action(PaletteAction::SearchInput(ch));
        }

        assert_eq!(event_loop.palette.filter(), "cave r");
        let names: Vec<_> = event_loop
            .palette
            .visible_creatures()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Cave Rat"]);
    }

    #[test]
    fn palette_errors_are_logged_by_severity() {
        let mut tile = testing::tile();
        let mut event_loop = testing::event_loop(&mut tile);

        event_loop.report_palette_error(&PaletteError::SpawnSizeOutOfRange {
            value: 0,
            min: 1,
            max: 50,
        });
        let latest = event_loop.messages.recent(1).next().unwrap();
        assert_eq!(latest.level, MessageLevel::Warning);

        event_loop.report_palette_error(&PaletteError::UnknownTileset(9));
        let latest = event_loop.messages.recent(1).next().unwrap();
        assert_eq!(latest.level, MessageLevel::Error);
        assert_eq!(latest.text, "no tileset at index 9");
    }

    #[test]
    fn use_brush_closes_with_palette_brush() {
        let mut tile = testing::tile();
        let mut event_loop = testing::event_loop(&mut tile);

        event_loop.handle_palette_action(PaletteAction::ToggleSpawnMode);
        let outcome = event_loop.handle_palette_action(PaletteAction::UseBrush);

        assert_eq!(
            outcome,
            Some(InspectorOutcome::Confirmed {
                brush: Some(BrushRef::Spawn)
            })
        );
    }

    #[test]
    fn use_brush_without_creature_keeps_dialog_open() {
        let mut tile = testing::tile();
        let mut event_loop = testing::event_loop(&mut tile);

        event_loop.handle_palette_action(PaletteAction::Purge);
        assert_eq!(event_loop.handle_palette_action(PaletteAction::UseBrush), None);
    }

    #[test]
    fn loading_without_folder_warns() {
        let mut tile = testing::tile();
        let mut event_loop = testing::event_loop(&mut tile);

        event_loop.handle_palette_action(PaletteAction::LoadNpcs);
        let latest = event_loop.messages.recent(1).next().unwrap();
        assert_eq!(latest.text, "No NPC folder configured");
    }

    #[test]
    fn loads_monsters_from_configured_folder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("orc.ron"), r#"(name: "Orc", look_type: 5)"#).unwrap();

        let mut tile = testing::tile();
        let mut event_loop = testing::event_loop(&mut tile);
        event_loop.cli_config.folders.monsters = Some(dir.path().to_path_buf());

        event_loop.handle_palette_action(PaletteAction::LoadMonsters);

        let monsters = &event_loop.palette.tilesets()[0];
        assert!(monsters.creatures.iter().any(|c| c.name == "Orc"));
    }
}
