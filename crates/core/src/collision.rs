//! Collision detector
//!
//! A shape collides when any filled cell, shifted by `pos + delta`, lands left
//! of column 0, right of the last column, below the last row, or on a locked
//! cell. Cells above row 0 are allowed: pieces spawn and rotate partly above
//! the visible well.

use crate::grid::Grid;
use crate::shapes::Shape;

/// Board position of a shape's top-left matrix corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// True if `shape` at `pos + (dx, dy)` would collide
pub fn collides(shape: &Shape, pos: Position, grid: &Grid, dx: i32, dy: i32) -> bool {
    let width = grid.width() as i32;
    let height = grid.height() as i32;

    shape.cells().any(|(sx, sy)| {
        let x = pos.x + sx + dx;
        let y = pos.y + sy + dy;
        if x < 0 || x >= width || y >= height {
            return true;
        }
        // y < 0 falls outside the grid and is open space.
        grid.get(x, y).is_some_and(|cell| cell.is_locked())
    })
}
