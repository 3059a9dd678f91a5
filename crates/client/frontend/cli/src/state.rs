//! Application state for panel focus and text entry.

/// Panel receiving keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Inspector,
    Palette,
}

/// Mutable UI state that is not owned by the inspector or the palette.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub focus: Focus,
    /// Typing into the palette search field.
    pub searching: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves focus to the other panel, leaving search mode.
    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Inspector => Focus::Palette,
            Focus::Palette => Focus::Inspector,
        };
        self.searching = false;
    }

    pub fn start_search(&mut self) {
        if self.focus == Focus::Palette {
            self.searching = true;
        }
    }

    pub fn end_search(&mut self) {
        self.searching = false;
    }
}
