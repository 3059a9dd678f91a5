//! Trait describing a runnable editor front-end.
use anyhow::Result;
use map_core::{BrushRef, Tile};

/// What the user chose in a session, reported back to the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOutcome {
    /// The tile after the session's edits; unchanged when the dialog was cancelled.
    pub tile: Tile,
    pub confirmed: bool,
    /// Brush the editor should activate next, if one was picked.
    pub brush: Option<BrushRef>,
}

/// Frontend abstraction for UI layers.
///
/// A frontend owns the tile for the length of the session and hands it back
/// together with the user's decision.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
pub trait FrontendApp {
    /// Run the frontend event loop until the user closes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal terminal error.
    fn run(self, tile: Tile) -> Result<SessionOutcome>
    where
        Self: Sized;
}
