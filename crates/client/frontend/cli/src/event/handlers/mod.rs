//! Event handler implementations for EventLoop.
//!
//! This module contains handler methods organized by responsibility:
//! - `input`: Terminal polling and key dispatch
//! - `inspector`: Item list gestures
//! - `palette`: Creature palette gestures
//! - `rendering`: Terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files.

mod input;
mod inspector;
mod palette;
mod rendering;
