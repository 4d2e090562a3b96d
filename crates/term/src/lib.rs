//! Terminal renderer for the game.
//!
//! A small game-oriented rendering layer: no widget toolkit, just a framebuffer
//! of styled glyphs that is diffed and flushed to the terminal.
//!
//! - [`fb`]: the framebuffer and its color/style types
//! - [`game_view`]: pure snapshot-to-framebuffer drawing (board, ghost, next box, HUD)
//! - [`renderer`]: terminal setup/teardown and diffed output via `crossterm`

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetrix_core as core;
pub use tetrix_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{BoardRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
