//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework. It maps `crossterm` key and mouse events into
//! [`crate::types::Command`], repeats held movement keys, and turns single-pointer
//! drags into swipe and tap commands.

pub mod gesture;
pub mod handler;
pub mod map;

pub use tetrix_types as types;

pub use gesture::SwipeTracker;
pub use handler::{is_repeatable, HoldRepeater};
pub use map::{handle_key_event, handle_mouse_event, should_quit};
