//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input adapters).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Pacing
//!
//! Gravity starts at [`BASE_DROP_MS`] and speeds up by [`DROP_INTERVAL_STEP_MS`]
//! per level above 1, never going below [`DROP_INTERVAL_MIN_MS`]:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 925ms |
//! | 3 | 850ms |
//! | 7 | 550ms |
//! | 13+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use tetrix_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert!(Command::ALL.contains(&Command::HardDrop));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default frame interval for drivers (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_INTERVAL_STEP_MS: u32 = 75;

/// Absolute minimum drop interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Level a fresh game starts at
pub const START_LEVEL: u32 = 1;

/// Lines needed per level step (`lines >= level * LINES_PER_LEVEL`)
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for clearing 0-4 lines, multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Horizontal offsets tried, in order, after a rotation.
pub const ROTATION_KICKS: [i8; 5] = [0, -1, 1, -2, 2];

/// Repeat interval for held buttons/keys.
pub const HOLD_REPEAT_MS: u32 = 110;

/// Pointer travel (px) that counts as one swipe step.
pub const MIN_SWIPE_PX: f32 = 18.0;

/// Upward pointer travel (px) that turns a release into a hard drop.
pub const HARD_DROP_SWIPE_PX: f32 = 40.0;

/// The seven tetromino piece kinds
///
/// Each kind doubles as the color id of the board cells it leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Display color as (r, g, b).
    ///
    /// ```
    /// use tetrix_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::Z.rgb(), (0xef, 0x44, 0x44));
    /// ```
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x60, 0xa5, 0xfa),
            PieceKind::J => (0x93, 0xc5, 0xfd),
            PieceKind::L => (0xf5, 0x9e, 0x0b),
            PieceKind::O => (0xfb, 0xbf, 0x24),
            PieceKind::S => (0x22, 0xc5, 0x5e),
            PieceKind::T => (0xa7, 0x8b, 0xfa),
            PieceKind::Z => (0xef, 0x44, 0x44),
        }
    }
}

/// Player commands consumed by the game state machine
///
/// Input adapters (keyboard, held buttons, gestures) translate device events
/// into these values; nothing else mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down without locking
    SoftDrop,
    /// Drop to the landing row and lock immediately
    HardDrop,
    /// Rotate piece 90° clockwise with horizontal kicks
    Rotate,
    /// Flip the pause flag
    TogglePause,
    /// Start over with an empty board
    Reset,
}

impl Command {
    /// Every command the engine understands.
    pub const ALL: [Command; 7] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::HardDrop,
        Command::Rotate,
        Command::TogglePause,
        Command::Reset,
    ];
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the color of the specified piece kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_no_duplicates() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            assert!(!PieceKind::ALL[i + 1..].contains(a));
        }
        for (i, a) in Command::ALL.iter().enumerate() {
            assert!(!Command::ALL[i + 1..].contains(a));
        }
    }

    #[test]
    fn pacing_constants() {
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(DROP_INTERVAL_MIN_MS, 100);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(ROTATION_KICKS, [0, -1, 1, -2, 2]);
    }
}
