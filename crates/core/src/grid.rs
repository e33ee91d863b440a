//! Grid module - the fixed-size well
//!
//! The grid is a `width x height` matrix of [`Cell`]s stored as a flat,
//! row-major vector. Coordinates are `(x, y)` with `x` growing to the right and
//! `y` growing downward; row 0 is the top.
//!
//! Dimensions are fixed at creation. Locked cells only change through
//! [`Grid::collapse_rows`]; everything else the engine writes is either the
//! falling piece's transient projection or a row marked for clearing.

use crate::types::{Cell, CellStatus, PieceKind};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        }
    }

    /// Build a grid from text rows, top row first.
    ///
    /// `.` is an empty cell and a piece letter (`IJLOSTZ`, any case) is a
    /// locked cell of that kind. Returns `None` on ragged rows or unknown
    /// characters.
    ///
    /// ```
    /// use timelord_tetris_core::Grid;
    ///
    /// let grid = Grid::from_rows(&["....", "II.O"]).unwrap();
    /// assert_eq!(grid.width(), 4);
    /// assert!(grid.get(0, 1).unwrap().is_locked());
    /// assert!(grid.get(2, 1).unwrap().is_empty());
    /// ```
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let width = rows.first().map(|r| r.chars().count())?;
        let mut grid = Self::new(u16::try_from(width).ok()?, u16::try_from(rows.len()).ok()?);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return None;
            }
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_str(ch.encode_utf8(&mut [0u8; 4]))?;
                grid.cells[y * width + x] = Cell::locked(kind);
            }
        }
        Some(grid)
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell at position (x, y)
    ///
    /// Out-of-bounds writes are silently dropped; callers validate placements
    /// with the collision detector first. Returns whether the write happened.
    pub fn write_cell(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// A row is full when every cell carries a kind, whatever its status
    pub fn is_full_row(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Re-tag every non-empty cell of the given rows
    pub fn set_row_status(&mut self, y: usize, status: CellStatus) {
        if y >= self.height as usize {
            return;
        }
        let start = y * self.width as usize;
        for cell in &mut self.cells[start..start + self.width as usize] {
            if let Some(next) = Cell::new(cell.kind(), status) {
                *cell = next;
            }
        }
    }

    /// Reset every transient cell to empty
    pub fn clear_transient(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.is_transient()) {
            *cell = Cell::EMPTY;
        }
    }

    /// Remove the given rows, shift the rows above them down, and fill the
    /// vacated top rows with empty cells. Row count never changes.
    ///
    /// Uses a two-pointer pass from the bottom so each kept row moves once.
    /// Indices outside the grid and duplicates are ignored.
    pub fn collapse_rows(&mut self, rows: &[usize]) {
        let width = self.width as usize;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(Cell::EMPTY);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of locked cells (handy for invariant checks)
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_locked()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_WIDTH, crate::types::DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(grid: &mut Grid, y: i32, kind: PieceKind) {
        for x in 0..grid.width() as i32 {
            grid.write_cell(x, y, Cell::locked(kind));
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 19), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 20), None);
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.cells().len(), 200);
        assert!(grid.cells().iter().all(|c| *c == Cell::EMPTY));
    }

    #[test]
    fn test_write_out_of_bounds_is_noop() {
        let mut grid = Grid::new(4, 4);
        let before = grid.clone();
        assert!(!grid.write_cell(-1, 0, Cell::locked(PieceKind::T)));
        assert!(!grid.write_cell(0, 4, Cell::locked(PieceKind::T)));
        assert!(!grid.write_cell(4, 0, Cell::locked(PieceKind::T)));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_full_row_counts_any_kind() {
        let mut grid = Grid::new(4, 3);
        assert!(!grid.is_full_row(2));
        fill_row(&mut grid, 2, PieceKind::I);
        grid.write_cell(1, 2, Cell::transient(PieceKind::O));
        assert!(grid.is_full_row(2));
        assert!(!grid.is_full_row(1));
        assert!(!grid.is_full_row(3));
    }

    #[test]
    fn test_collapse_single_bottom_row() {
        let mut grid = Grid::new(3, 3);
        grid.write_cell(0, 1, Cell::locked(PieceKind::J));
        fill_row(&mut grid, 2, PieceKind::I);

        grid.collapse_rows(&[2]);

        assert_eq!(grid.row(0).unwrap(), &[Cell::EMPTY; 3]);
        assert_eq!(grid.get(0, 2), Some(Cell::locked(PieceKind::J)));
        assert_eq!(grid.locked_count(), 1);
    }

    #[test]
    fn test_collapse_non_adjacent_rows() {
        let mut grid = Grid::new(2, 20);
        // Tag each row with a distinct marker in column 0.
        for y in 0..20 {
            let kind = PieceKind::ALL[y as usize % 7];
            grid.write_cell(0, y, Cell::locked(kind));
        }
        let original = grid.clone();

        grid.collapse_rows(&[2, 5]);

        assert_eq!(grid.height(), 20);
        assert!(grid.row(0).unwrap().iter().all(|c| c.is_empty()));
        assert!(grid.row(1).unwrap().iter().all(|c| c.is_empty()));
        // rows 0-1 shift down by 2
        assert_eq!(grid.row(2), original.row(0));
        assert_eq!(grid.row(3), original.row(1));
        // rows 3-4 shift down by 1
        assert_eq!(grid.row(4), original.row(3));
        assert_eq!(grid.row(5), original.row(4));
        // rows below the lowest cleared row stay put
        for y in 6..20 {
            assert_eq!(grid.row(y), original.row(y));
        }
    }

    #[test]
    fn test_clear_transient_keeps_locked() {
        let mut grid = Grid::new(3, 2);
        grid.write_cell(0, 0, Cell::transient(PieceKind::Z));
        grid.write_cell(1, 1, Cell::locked(PieceKind::Z));
        grid.clear_transient();
        assert_eq!(grid.get(0, 0), Some(Cell::EMPTY));
        assert_eq!(grid.get(1, 1), Some(Cell::locked(PieceKind::Z)));
    }

    #[test]
    fn test_set_row_status_skips_empty_cells() {
        let mut grid = Grid::new(3, 1);
        grid.write_cell(0, 0, Cell::locked(PieceKind::L));
        grid.set_row_status(0, CellStatus::Transient);
        assert_eq!(grid.get(0, 0), Some(Cell::transient(PieceKind::L)));
        assert_eq!(grid.get(1, 0), Some(Cell::EMPTY));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(&["...", ".."]).is_none());
        assert!(Grid::from_rows(&["..x"]).is_none());
        assert!(Grid::from_rows(&[]).is_none());
    }
}
