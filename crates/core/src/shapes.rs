//! Shape catalog - piece matrices and rotation
//!
//! Each kind is a small square matrix (side 2 to 4). Only the spawn matrices
//! are stored; rotated shapes are derived on demand.
//!
//! ```text
//! I         J       L       O     S       T       Z
//! .I..      .J.     .L.     OO    .SS     ...     ZZ.
//! .I..      .J.     .L.     OO    SS.     TTT     .ZZ
//! .I..      JJ.     .LL           ...     .T.     ...
//! .I..
//! ```

use crate::rng::PieceSource;
use crate::types::{PieceKind, RotateDir};

/// Largest matrix side in the catalog
pub const MAX_SIDE: usize = 4;

/// A piece matrix: which cells of a `side x side` square are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    kind: PieceKind,
    side: u8,
    /// `mask[row][col]`; only the top-left `side x side` block is meaningful
    mask: [[bool; MAX_SIDE]; MAX_SIDE],
}

const fn spawn_mask(kind: PieceKind) -> (u8, [[bool; MAX_SIDE]; MAX_SIDE]) {
    const X: bool = true;
    const O: bool = false;
    match kind {
        PieceKind::I => (
            4,
            [[O, X, O, O], [O, X, O, O], [O, X, O, O], [O, X, O, O]],
        ),
        PieceKind::J => (
            3,
            [[O, X, O, O], [O, X, O, O], [X, X, O, O], [O, O, O, O]],
        ),
        PieceKind::L => (
            3,
            [[O, X, O, O], [O, X, O, O], [O, X, X, O], [O, O, O, O]],
        ),
        PieceKind::O => (
            2,
            [[X, X, O, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
        ),
        PieceKind::S => (
            3,
            [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
        ),
        PieceKind::T => (
            3,
            [[O, O, O, O], [X, X, X, O], [O, X, O, O], [O, O, O, O]],
        ),
        PieceKind::Z => (
            3,
            [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
        ),
    }
}

impl Shape {
    /// Spawn orientation for a kind
    pub fn spawn(kind: PieceKind) -> Self {
        let (side, mask) = spawn_mask(kind);
        Self { kind, side, mask }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Matrix side length (width == height)
    pub fn side(&self) -> usize {
        self.side as usize
    }

    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.side() && row < self.side() && self.mask[row][col]
    }

    /// Local `(col, row)` of every filled cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let side = self.side();
        (0..side).flat_map(move |row| {
            (0..side)
                .filter(move |&col| self.mask[row][col])
                .map(move |col| (col as i32, row as i32))
        })
    }

    /// Rotated copy.
    ///
    /// Clockwise is transpose then reverse each row; counter-clockwise is
    /// transpose then reverse the row order.
    pub fn rotated(&self, dir: RotateDir) -> Self {
        let n = self.side();
        let mut mask = [[false; MAX_SIDE]; MAX_SIDE];
        for (row, out) in mask.iter_mut().enumerate().take(n) {
            for (col, cell) in out.iter_mut().enumerate().take(n) {
                // transposed[row][col] = mask[col][row]
                *cell = match dir {
                    RotateDir::Cw => self.mask[n - 1 - col][row],
                    RotateDir::Ccw => self.mask[col][n - 1 - row],
                };
            }
        }
        Self { mask, ..*self }
    }

    /// First and last filled row, if any
    pub fn row_span(&self) -> Option<(i32, i32)> {
        let mut rows = self.cells().map(|(_, row)| row);
        let first = rows.next()?;
        Some(rows.fold((first, first), |(lo, hi), r| (lo.min(r), hi.max(r))))
    }
}

/// Pick the next shape from a piece source
pub fn random_shape(source: &mut impl PieceSource) -> Shape {
    Shape::spawn(source.next_kind())
}
