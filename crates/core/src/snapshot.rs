//! Snapshot module - a plain-data view of one frame
//!
//! Renderers read a [`GameSnapshot`] instead of the live state. It is `Copy`
//! and filled in place by `GameState::snapshot_into`, so drawing a frame
//! allocates nothing.

use crate::piece::ActivePiece;
use crate::shapes::Matrix;
use crate::types::{Cell, PieceKind, BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Landing row of the active piece (same column and matrix)
    pub ghost_y: Option<i8>,
    pub next: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub best: u32,
    pub paused: bool,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.ghost_y = None;
        self.next = None;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.best = 0;
        self.paused = false;
        self.drop_interval_ms = BASE_DROP_MS;
    }

    /// Board cell at (x, y), `None` when out of range or empty.
    pub fn cell(&self, x: i8, y: i8) -> Cell {
        if x < 0 || y < 0 {
            return None;
        }
        self.board
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: None,
            score: 0,
            level: 0,
            lines: 0,
            best: 0,
            paused: false,
            drop_interval_ms: 0,
        };
        s.clear();
        s
    }
}
