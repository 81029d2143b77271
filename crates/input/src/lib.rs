//! Input module - key mapping and prompt-field state for the TUI.
//!
//! Keeps crossterm key events at the edge: the rest of the application only
//! sees semantic navigation actions and text-field edits.

pub mod field;
pub mod map;

pub use field::{FieldEvent, TextField};
pub use map::{map_nav_key, should_cancel, should_quit, NavAction};
