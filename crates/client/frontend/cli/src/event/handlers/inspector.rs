//! Item list gestures.

use client_frontend_core::{InspectorCommand, InspectorOutcome};

use super::super::EventLoop;

impl EventLoop<'_> {
    pub(in crate::event) fn handle_inspector_command(
        &mut self,
        command: InspectorCommand,
    ) -> Option<InspectorOutcome> {
        let deleted_before = self.inspector.deleted_count();
        let outcome = self.inspector.handle(command);

        let deleted = self.inspector.deleted_count() - deleted_before;
        if deleted > 0 {
            let text = format!(
                "Deleted {deleted} item(s) from {}",
                self.inspector.tile().position
            );
            if self.frontend_config.messages.warn_on_delete {
                self.messages.warn(text);
            } else {
                self.messages.info(text);
            }
        }

        outcome
    }

    /// Applies a click on the row under the cursor.
    pub(in crate::event) fn select_at_cursor(&mut self, toggle: bool) -> Option<InspectorOutcome> {
        if self.inspector.is_empty() {
            return None;
        }
        let row = self.inspector.cursor();
        let command = if toggle {
            InspectorCommand::ToggleSelect(row)
        } else {
            InspectorCommand::SelectOnly(row)
        };
        self.handle_inspector_command(command)
    }
}
