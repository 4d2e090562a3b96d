//! Shapes module - tetromino catalog and occupancy matrices
//!
//! Every piece is described by a small occupancy grid (at most 4x4). Rotation is
//! a plain 90° clockwise transform of that grid; there are no per-kind rotation
//! tables, so the O piece rotates onto itself and the I piece swaps between a
//! horizontal row and a vertical column inside its 4x4 box.

use crate::types::PieceKind;

/// Largest side of any occupancy matrix.
pub const MAX_DIM: usize = 4;

/// Occupancy grid of a piece, `rows` x `cols`, addressed as `(x, y)` = (column, row).
///
/// Cells outside `rows` x `cols` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_DIM]; MAX_DIM],
}

impl Matrix {
    /// Build a square matrix from a compile-time grid.
    const fn square<const N: usize>(grid: [[u8; N]; N]) -> Self {
        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        let mut y = 0;
        while y < N {
            let mut x = 0;
            while x < N {
                cells[y][x] = grid[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self {
            rows: N as u8,
            cols: N as u8,
            cells,
        }
    }

    /// Build a matrix from rows of 0/1 values.
    ///
    /// Returns `None` for empty, ragged or oversized input.
    ///
    /// ```
    /// use tetrix_core::Matrix;
    ///
    /// let bar = Matrix::from_rows(&[&[1, 1, 1]]).unwrap();
    /// assert_eq!((bar.rows(), bar.cols()), (1, 3));
    /// assert!(Matrix::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_DIM || width == 0 || width > MAX_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Some(Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether (x, y) is occupied; false outside the matrix.
    pub fn get(&self, x: u8, y: u8) -> bool {
        x < self.cols && y < self.rows && self.cells[y as usize][x as usize]
    }

    /// Iterate offsets `(dx, dy)` of the occupied cells, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols)
                .filter(move |&x| self.cells[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Rotate 90° clockwise: an H x W matrix becomes W x H with
    /// `out[x][H - 1 - y] = self[y][x]`.
    pub fn rotated(&self) -> Self {
        let h = self.rows as usize;
        let w = self.cols as usize;
        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        for y in 0..h {
            for x in 0..w {
                cells[x][h - 1 - y] = self.cells[y][x];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Rotate a matrix 90° clockwise (see [`Matrix::rotated`]).
pub fn rotate(matrix: &Matrix) -> Matrix {
    matrix.rotated()
}

const I_SHAPE: Matrix = Matrix::square([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const J_SHAPE: Matrix = Matrix::square([
    [1, 0, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const L_SHAPE: Matrix = Matrix::square([
    [0, 0, 1],
    [1, 1, 1],
    [0, 0, 0],
]);

const O_SHAPE: Matrix = Matrix::square([
    [1, 1],
    [1, 1],
]);

const S_SHAPE: Matrix = Matrix::square([
    [0, 1, 1],
    [1, 1, 0],
    [0, 0, 0],
]);

const T_SHAPE: Matrix = Matrix::square([
    [0, 1, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const Z_SHAPE: Matrix = Matrix::square([
    [1, 1, 0],
    [0, 1, 1],
    [0, 0, 0],
]);

/// Spawn orientation of a piece kind.
pub fn base_matrix(kind: PieceKind) -> Matrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
