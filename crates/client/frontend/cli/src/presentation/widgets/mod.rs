//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads model state and renders to a
//! terminal frame. Widgets never mutate the inspector or the palette.

pub mod footer;
pub mod header;
pub mod inspector;
pub mod messages;
pub mod palette;
