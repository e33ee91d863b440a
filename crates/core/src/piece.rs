//! Active piece controller
//!
//! Owns the falling piece's position and current (possibly rotated) shape and
//! validates every move or rotation with the collision detector before
//! committing it. Candidates are built in locals and only assigned once they
//! pass, so a refused request never leaves a partial change behind.

use crate::collision::{collides, Position};
use crate::grid::Grid;
use crate::shapes::Shape;
use crate::types::{Cell, Outcome, PieceKind, RotateDir};

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    position: Position,
    shape: Shape,
    locked: bool,
}

/// Spawn column for a grid width: the 4-wide spawn box sits centered
pub fn spawn_x(grid_width: u16) -> i32 {
    grid_width as i32 / 2 - 2
}

impl ActivePiece {
    /// New piece at the top of the well, horizontally centered
    pub fn spawn(kind: PieceKind, grid_width: u16) -> Self {
        Self::at(Shape::spawn(kind), Position::new(spawn_x(grid_width), 0))
    }

    /// Piece with an explicit shape and position
    pub fn at(shape: Shape, position: Position) -> Self {
        Self {
            position,
            shape,
            locked: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Absolute board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let Position { x, y } = self.position;
        self.shape.cells().map(move |(sx, sy)| (x + sx, y + sy))
    }

    /// True if the piece overlaps a locked cell or a wall where it stands
    pub fn collides_here(&self, grid: &Grid) -> bool {
        collides(&self.shape, self.position, grid, 0, 0)
    }

    /// Try to shift the piece by `(dx, dy)`.
    ///
    /// A blocked descent (`dy > 0`) is the only way a piece becomes locked.
    /// A blocked sideways move is a no-op.
    pub fn try_move(&mut self, grid: &Grid, dx: i32, dy: i32) -> Outcome {
        if self.locked {
            return Outcome::Blocked;
        }
        if !collides(&self.shape, self.position, grid, dx, dy) {
            self.position = self.position.offset(dx, dy);
            return Outcome::Moved;
        }
        if dy > 0 {
            self.locked = true;
            Outcome::Locked
        } else {
            Outcome::Blocked
        }
    }

    /// Move down `distance` rows and lock in place.
    ///
    /// The caller has already measured `distance` with [`Self::drop_distance`].
    pub(crate) fn drop_and_lock(&mut self, distance: i32) {
        self.position = self.position.offset(0, distance);
        self.locked = true;
    }

    /// Rotate with a horizontal kick search.
    ///
    /// Offsets tried, in order: 0, +1, -1, +2, ... with as many attempts in
    /// total as the matrix is wide. The first clear candidate is committed;
    /// if none is clear the piece is left exactly as it was.
    pub fn rotate(&mut self, grid: &Grid, dir: RotateDir) -> Outcome {
        if self.locked {
            return Outcome::RotationFailed;
        }
        let rotated = self.shape.rotated(dir);

        for offset in kick_offsets(rotated.side()) {
            let candidate = self.position.offset(offset, 0);
            if !collides(&rotated, candidate, grid, 0, 0) {
                self.shape = rotated;
                self.position = candidate;
                return Outcome::Rotated;
            }
        }
        Outcome::RotationFailed
    }

    /// Rows the piece can fall before it is blocked
    pub fn drop_distance(&self, grid: &Grid) -> i32 {
        let mut distance = 0;
        while !collides(&self.shape, self.position, grid, 0, distance + 1) {
            distance += 1;
        }
        distance
    }

    /// Write the piece into the grid as transient projection cells
    pub fn project(&self, grid: &mut Grid) {
        self.write_over_unlocked(grid, Cell::transient(self.kind()));
    }

    /// Write the piece into the grid as locked cells.
    ///
    /// Cells above the top row are dropped, and cells that are already locked
    /// are left alone (only possible when a piece spawned into the stack).
    pub fn merge(&self, grid: &mut Grid) {
        self.write_over_unlocked(grid, Cell::locked(self.kind()));
    }

    fn write_over_unlocked(&self, grid: &mut Grid, cell: Cell) {
        for (x, y) in self.cells() {
            if grid.get(x, y).is_some_and(|c| !c.is_locked()) {
                grid.write_cell(x, y, cell);
            }
        }
    }
}

/// Horizontal kick offsets: `0`, then `+1, -1, +2, ...`, `side` attempts in total
pub fn kick_offsets(side: usize) -> impl Iterator<Item = i32> {
    std::iter::once(0).chain((1..side.max(1) as i32).map(|i| {
        let step = (i + 1) / 2;
        if i % 2 == 1 {
            step
        } else {
            -step
        }
    }))
}
