//! Cross-frontend primitives for the map editor.
//!
//! Houses the tile inspector controller, the status log, and configuration
//! that both the terminal client and future graphical clients can reuse.
pub mod config;
pub mod frontend;
pub mod inspector;
pub mod message;

pub use config::{FrontendConfig, MessageConfig, PaletteConfig};
pub use frontend::{FrontendApp, SessionOutcome};
pub use inspector::{InspectorCommand, InspectorOutcome, InspectorRow, TileFact, TileInspector};
pub use message::{MessageEntry, MessageLevel, MessageLog};
