//! Event handling for the CLI client.
//!
//! This module contains the event loop that routes keyboard input to the tile
//! inspector and the creature palette and redraws after every change.

mod handlers;
mod r#loop;

pub use r#loop::{EventLoop, LoopExit};
