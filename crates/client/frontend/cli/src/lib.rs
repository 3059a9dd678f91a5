//! Terminal UI frontend for the map editor.
//!
//! This crate provides a terminal-based tile inspector and creature palette.
//! It implements the `client_frontend_core::FrontendApp` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Drives a `TileInspector` over a working copy of the tile
//! - Drives a `CreaturePalette` for creature and spawn brushes
//! - Hands the edited tile and the chosen brush back to the caller

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;

// Re-export for convenience (used in the client binary)
pub use client_frontend_core::FrontendConfig;
