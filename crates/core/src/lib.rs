//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, persistence, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every rule next to the code
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//! - **Allocation-free**: Board, matrices and pieces are fixed-size values
//!
//! # Module Structure
//!
//! - [`shapes`]: Tetromino catalog and the occupancy matrix with its 90° rotation
//! - [`rng`]: 7-bag random piece generation for fair distribution
//! - [`board`]: 10x20 game board with collision, merging and line clearing
//! - [`piece`]: The falling piece, spawn centering and kicked rotation
//! - [`scoring`]: Line clear points, level thresholds and gravity pacing
//! - [`game_state`]: Complete game state and the command entry point
//! - [`snapshot`]: Read-only per-frame view for renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every bag of seven draws holds each kind once
//! - **Rotation**: clockwise only, with horizontal kicks `0, -1, +1, -2, +2`
//! - **No ceiling**: rows above the board never collide
//! - **Game over**: a spawn that collides wipes the board and restarts the counters
//! - **Scoring**: `[0, 100, 300, 500, 800][lines] * level`, a level every 10 lines
//!
//! # Example
//!
//! ```
//! use tetrix_core::GameState;
//! use tetrix_types::Command;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::HardDrop);
//!
//! // One piece is now locked at the bottom.
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::advance`](game_state::GameState::advance) every frame with the
//! elapsed milliseconds. Gravity starts at 1000ms per row and shortens by 75ms per
//! level down to 100ms.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tetrix_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, LockEvent};
pub use piece::{spawn_x, try_rotate, ActivePiece};
pub use rng::{Bag, SimpleRng};
pub use scoring::{drop_interval_ms, line_clear_points};
pub use shapes::{base_matrix, rotate, Matrix};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
