//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::InspectorCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, Focus};

/// Spawn time step for one key press, in seconds.
pub const SPAWN_TIME_STEP: i64 = 10;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a command to the tile inspector.
    Inspector(InspectorCommand),
    CursorUp,
    CursorDown,
    /// Select only the row under the cursor.
    SelectAtCursor,
    /// Add or remove the row under the cursor from the selection.
    ToggleAtCursor,
    Palette(PaletteAction),
    SwitchFocus,
    /// No meaningful command was produced.
    None,
}

/// Gestures on the creature palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteAction {
    PrevCreature,
    NextCreature,
    PrevTileset,
    NextTileset,
    ToggleSpawnMode,
    /// Adjust spawn time by this many seconds.
    SpawnTime(i64),
    /// Adjust spawn size by this many tiles.
    SpawnSize(i64),
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    EndSearch,
    Purge,
    LoadNpcs,
    LoadMonsters,
    /// Close the session and activate the palette's brush.
    UseBrush,
}

/// Translates `KeyEvent`s into editor commands based on the focused panel.
#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, state: &AppState) -> KeyAction {
        if state.searching {
            return Self::search_key(key);
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => return KeyAction::SwitchFocus,
            KeyCode::Esc => return KeyAction::Inspector(InspectorCommand::Cancel),
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                return KeyAction::Inspector(InspectorCommand::Cancel);
            }
            _ => {}
        }

        match state.focus {
            Focus::Inspector => Self::inspector_key(key),
            Focus::Palette => Self::palette_key(key),
        }
    }

    fn inspector_key(key: KeyEvent) -> KeyAction {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Up if shift => KeyAction::Inspector(InspectorCommand::MoveUp),
            KeyCode::Down if shift => KeyAction::Inspector(InspectorCommand::MoveDown),
            KeyCode::Up | KeyCode::Char('k') => KeyAction::CursorUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::CursorDown,
            KeyCode::Char('K') | KeyCode::Char('u') => KeyAction::Inspector(InspectorCommand::MoveUp),
            KeyCode::Char('J') | KeyCode::Char('n') => {
                KeyAction::Inspector(InspectorCommand::MoveDown)
            }
            KeyCode::Char(' ') => KeyAction::ToggleAtCursor,
            KeyCode::Enter => KeyAction::SelectAtCursor,
            KeyCode::Char('c') => KeyAction::Inspector(InspectorCommand::ClearSelection),
            KeyCode::Delete | KeyCode::Char('d') => KeyAction::Inspector(InspectorCommand::Delete),
            KeyCode::Char('r') => KeyAction::Inspector(InspectorCommand::SelectRaw),
            KeyCode::Char('o') => KeyAction::Inspector(InspectorCommand::Confirm),
            _ => KeyAction::None,
        }
    }

    fn palette_key(key: KeyEvent) -> KeyAction {
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => PaletteAction::PrevCreature,
            KeyCode::Down | KeyCode::Char('j') => PaletteAction::NextCreature,
            KeyCode::Left | KeyCode::Char('h') => PaletteAction::PrevTileset,
            KeyCode::Right | KeyCode::Char('l') => PaletteAction::NextTileset,
            KeyCode::Char('s') => PaletteAction::ToggleSpawnMode,
            KeyCode::Char('+') => PaletteAction::SpawnTime(SPAWN_TIME_STEP),
            KeyCode::Char('-') => PaletteAction::SpawnTime(-SPAWN_TIME_STEP),
            KeyCode::Char(']') => PaletteAction::SpawnSize(1),
            KeyCode::Char('[') => PaletteAction::SpawnSize(-1),
            KeyCode::Char('/') => PaletteAction::StartSearch,
            KeyCode::Char('p') => PaletteAction::Purge,
            KeyCode::Char('N') => PaletteAction::LoadNpcs,
            KeyCode::Char('M') => PaletteAction::LoadMonsters,
            KeyCode::Enter => PaletteAction::UseBrush,
            KeyCode::Char('o') => return KeyAction::Inspector(InspectorCommand::Confirm),
            _ => return KeyAction::None,
        };
        KeyAction::Palette(action)
    }

    fn search_key(key: KeyEvent) -> KeyAction {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc => PaletteAction::EndSearch,
            KeyCode::Backspace => PaletteAction::SearchBackspace,
            KeyCode::Char(ch) => PaletteAction::SearchInput(ch),
            _ => return KeyAction::None,
        };
        KeyAction::Palette(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        key_with(code, KeyModifiers::empty())
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn palette_state() -> AppState {
        let mut state = AppState::new();
        state.switch_focus();
        state
    }

    #[test]
    fn maps_inspector_buttons() {
        let handler = InputHandler::new();
        let state = AppState::new();

        assert_eq!(
            handler.handle_key(key(KeyCode::Char('d')), &state),
            KeyAction::Inspector(InspectorCommand::Delete)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r')), &state),
            KeyAction::Inspector(InspectorCommand::SelectRaw)
        );
        assert_eq!(
            handler.handle_key(key_with(KeyCode::Up, KeyModifiers::SHIFT), &state),
            KeyAction::Inspector(InspectorCommand::MoveUp)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('J')), &state),
            KeyAction::Inspector(InspectorCommand::MoveDown)
        );
    }

    #[test]
    fn maps_cursor_and_selection() {
        let handler = InputHandler::new();
        let state = AppState::new();

        assert_eq!(handler.handle_key(key(KeyCode::Up), &state), KeyAction::CursorUp);
        assert_eq!(handler.handle_key(key(KeyCode::Char('j')), &state), KeyAction::CursorDown);
        assert_eq!(handler.handle_key(key(KeyCode::Char(' ')), &state), KeyAction::ToggleAtCursor);
        assert_eq!(handler.handle_key(key(KeyCode::Enter), &state), KeyAction::SelectAtCursor);
    }

    #[test]
    fn escape_and_q_cancel_from_any_panel() {
        let handler = InputHandler::new();
        let cancel = KeyAction::Inspector(InspectorCommand::Cancel);

        assert_eq!(handler.handle_key(key(KeyCode::Esc), &AppState::new()), cancel);
        assert_eq!(handler.handle_key(key(KeyCode::Char('q')), &palette_state()), cancel);
    }

    #[test]
    fn palette_keys_only_apply_with_palette_focus() {
        let handler = InputHandler::new();
        let state = palette_state();

        assert_eq!(
            handler.handle_key(key(KeyCode::Right), &state),
            KeyAction::Palette(PaletteAction::NextTileset)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('+')), &state),
            KeyAction::Palette(PaletteAction::SpawnTime(SPAWN_TIME_STEP))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), &state),
            KeyAction::Palette(PaletteAction::UseBrush)
        );
        assert_eq!(handler.handle_key(key(KeyCode::Right), &AppState::new()), KeyAction::None);
    }

    #[test]
    fn search_mode_captures_text() {
        let handler = InputHandler::new();
        let mut state = palette_state();
        state.start_search();

        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), &state),
            KeyAction::Palette(PaletteAction::SearchInput('q'))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace), &state),
            KeyAction::Palette(PaletteAction::SearchBackspace)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), &state),
            KeyAction::Palette(PaletteAction::EndSearch)
        );
    }
}
