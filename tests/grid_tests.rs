//! Grid tests - full-row detection and collapse through the public API

use timelord_tetris::core::clear::scan_full_rows;
use timelord_tetris::core::{ClearPhase, ClearSession, Grid};
use timelord_tetris::types::{Cell, CellStatus, PieceKind};

fn fill_row(grid: &mut Grid, y: i32, kind: PieceKind) {
    for x in 0..grid.width() as i32 {
        grid.write_cell(x, y, Cell::locked(kind));
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(10, 20);
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 20);
    assert_eq!(grid.cells().len(), 200);
    assert!(grid.cells().iter().all(|c| c.is_empty()));
    for y in 0..20 {
        assert!(!grid.is_full_row(y));
    }
}

#[test]
fn test_write_out_of_bounds_is_noop() {
    let mut grid = Grid::new(10, 20);
    let before = grid.clone();
    assert!(!grid.write_cell(-1, 0, Cell::locked(PieceKind::T)));
    assert!(!grid.write_cell(10, 0, Cell::locked(PieceKind::T)));
    assert!(!grid.write_cell(0, -1, Cell::locked(PieceKind::T)));
    assert!(!grid.write_cell(0, 20, Cell::locked(PieceKind::T)));
    assert_eq!(grid, before);
}

#[test]
fn test_full_row_needs_every_cell() {
    let mut grid = Grid::new(10, 20);
    for x in 0..9 {
        grid.write_cell(x, 19, Cell::locked(PieceKind::I));
    }
    assert!(!grid.is_full_row(19));
    grid.write_cell(9, 19, Cell::transient(PieceKind::T));
    // Any kind counts, whatever its status.
    assert!(grid.is_full_row(19));
}

#[test]
fn test_rows_two_and_five_enter_pending() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, 2, PieceKind::J);
    fill_row(&mut grid, 5, PieceKind::L);
    grid.write_cell(0, 10, Cell::locked(PieceKind::O));

    assert_eq!(scan_full_rows(&grid).as_slice(), &[2, 5]);

    let mut session = ClearSession::new();
    assert_eq!(session.begin(&mut grid), Some(&[2usize, 5][..]));
    assert_eq!(session.phase(), ClearPhase::Pending);
    for y in [2, 5] {
        assert!(grid
            .row(y)
            .unwrap()
            .iter()
            .all(|c| c.status() == CellStatus::Transient));
    }
}

#[test]
fn test_collapse_rows_two_and_five() {
    let mut grid = Grid::new(10, 20);
    // Tag each surviving row above the cleared ones with a distinct column.
    for (y, x) in [(0, 0), (1, 1), (3, 3), (4, 4)] {
        grid.write_cell(x, y, Cell::locked(PieceKind::S));
    }
    fill_row(&mut grid, 2, PieceKind::I);
    fill_row(&mut grid, 5, PieceKind::I);
    grid.write_cell(7, 6, Cell::locked(PieceKind::Z));

    grid.collapse_rows(&[2, 5]);

    assert_eq!(grid.height(), 20);
    // Two fresh rows on top.
    assert!(grid.row(0).unwrap().iter().all(|c| c.is_empty()));
    assert!(grid.row(1).unwrap().iter().all(|c| c.is_empty()));
    // Rows 0-1 moved down by 2, rows 3-4 by 1.
    assert_eq!(grid.get(0, 2), Some(Cell::locked(PieceKind::S)));
    assert_eq!(grid.get(1, 3), Some(Cell::locked(PieceKind::S)));
    assert_eq!(grid.get(3, 4), Some(Cell::locked(PieceKind::S)));
    assert_eq!(grid.get(4, 5), Some(Cell::locked(PieceKind::S)));
    // Below the lowest cleared row nothing moves.
    assert_eq!(grid.get(7, 6), Some(Cell::locked(PieceKind::Z)));
    assert_eq!(grid.locked_count(), 5);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert!(Grid::from_rows(&[]).is_none());
    assert!(Grid::from_rows(&["..", "..."]).is_none());
    assert!(Grid::from_rows(&[".#"]).is_none());
    let grid = Grid::from_rows(&["i.", ".z"]).unwrap();
    assert_eq!(grid.get(0, 0), Some(Cell::locked(PieceKind::I)));
    assert_eq!(grid.get(1, 1), Some(Cell::locked(PieceKind::Z)));
}
