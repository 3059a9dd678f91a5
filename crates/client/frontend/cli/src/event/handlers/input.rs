//! Keyboard input handling and dispatch.

use anyhow::Result;
use client_frontend_core::InspectorOutcome;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl EventLoop<'_> {
    /// Wait for keyboard input and handle it. Returns the outcome once the
    /// dialog closes.
    pub(in crate::event) fn handle_input_tick(
        &mut self,
        terminal: &mut Tui,
    ) -> Result<Option<InspectorOutcome>> {
        if !term_event::poll(Self::poll_interval())? {
            return Ok(None);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let outcome = self.handle_key_press(key);
                if outcome.is_none() {
                    self.render(terminal)?;
                }
                Ok(outcome)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Translate a key press and apply it.
    pub(in crate::event) fn handle_key_press(&mut self, key: KeyEvent) -> Option<InspectorOutcome> {
        let action = self.input.handle_key(key, &self.app_state);
        self.dispatch(action)
    }

    pub(in crate::event) fn dispatch(&mut self, action: KeyAction) -> Option<InspectorOutcome> {
        match action {
            KeyAction::Inspector(command) => self.handle_inspector_command(command),
            KeyAction::CursorUp => {
                self.inspector.cursor_up();
                None
            }
            KeyAction::CursorDown => {
                self.inspector.cursor_down();
                None
            }
            KeyAction::SelectAtCursor => self.select_at_cursor(false),
            KeyAction::ToggleAtCursor => self.select_at_cursor(true),
            KeyAction::Palette(action) => self.handle_palette_action(action),
            KeyAction::SwitchFocus => {
                self.app_state.switch_focus();
                None
            }
            KeyAction::None => None,
        }
    }
}
