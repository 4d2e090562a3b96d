//! Piece module - the falling piece and its rotation
//!
//! An [`ActivePiece`] owns a copy of its occupancy matrix, so rotating it never
//! touches the shape catalog. Rotation uses a simplified kick list instead of
//! full SRS tables: after the 90° turn, the piece may shift horizontally by the
//! offsets in [`ROTATION_KICKS`], tried in order.

use crate::board::Board;
use crate::shapes::{base_matrix, Matrix};
use crate::types::{PieceKind, BOARD_WIDTH, ROTATION_KICKS};

/// A piece on (or about to enter) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current rotation of the piece's occupancy grid
    pub matrix: Matrix,
    /// Board column of the matrix's left edge
    pub x: i8,
    /// Board row of the matrix's top edge
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece with its base matrix, horizontally centered on row 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self::spawn_with(kind, base_matrix(kind))
    }

    /// Create a centered piece on row 0 from an explicit matrix
    pub fn spawn_with(kind: PieceKind, matrix: Matrix) -> Self {
        Self {
            kind,
            matrix,
            x: spawn_x(&matrix),
            y: 0,
        }
    }

    /// Display color id for this piece's cells
    pub fn color(&self) -> PieceKind {
        self.kind
    }

    /// Absolute board coordinates `(x, y)` of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Column that centers a matrix: `BOARD_WIDTH / 2 - width / 2` (both floored)
pub fn spawn_x(matrix: &Matrix) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (matrix.cols() / 2) as i8
}

/// Try to rotate a piece clockwise with horizontal kicks
///
/// Returns the rotated piece and the kick that made it fit, or `None` if no
/// offset in [`ROTATION_KICKS`] avoids a collision. Kicks are relative to the
/// original column and tried strictly in order.
pub fn try_rotate(piece: &ActivePiece, board: &Board) -> Option<(ActivePiece, i8)> {
    let rotated = ActivePiece {
        matrix: piece.matrix.rotated(),
        ..*piece
    };

    ROTATION_KICKS.iter().find_map(|&kick| {
        let candidate = rotated.shifted(kick, 0);
        if board.collide(&candidate) {
            None
        } else {
            Some((candidate, kick))
        }
    })
}
