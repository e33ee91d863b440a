//! Pieces tests - shape catalog, rotation and wall kicks

use timelord_tetris::core::piece::kick_offsets;
use timelord_tetris::core::{collides, ActivePiece, Grid, Position, Shape};
use timelord_tetris::types::{Cell, Outcome, PieceKind, RotateDir};

fn cells(shape: &Shape) -> Vec<(i32, i32)> {
    shape.cells().collect()
}

// ============== Shape Tests ==============

#[test]
fn test_i_piece_orientations() {
    let i = Shape::spawn(PieceKind::I);
    assert_eq!(cells(&i), [(1, 0), (1, 1), (1, 2), (1, 3)]);
    assert_eq!(
        cells(&i.rotated(RotateDir::Cw)),
        [(0, 1), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        cells(&i.rotated(RotateDir::Cw).rotated(RotateDir::Cw)),
        [(2, 0), (2, 1), (2, 2), (2, 3)]
    );
}

#[test]
fn test_o_piece_is_two_by_two() {
    let o = Shape::spawn(PieceKind::O);
    assert_eq!(o.side(), 2);
    assert_eq!(cells(&o), [(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn test_t_piece_orientations() {
    let t = Shape::spawn(PieceKind::T);
    assert_eq!(cells(&t), [(0, 1), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(
        cells(&t.rotated(RotateDir::Cw)),
        [(1, 0), (0, 1), (1, 1), (1, 2)]
    );
    assert_eq!(
        cells(&t.rotated(RotateDir::Ccw)),
        [(1, 0), (1, 1), (2, 1), (1, 2)]
    );
}

#[test]
fn test_s_and_z_mirror_each_other() {
    let s = Shape::spawn(PieceKind::S);
    let z = Shape::spawn(PieceKind::Z);
    let mirrored: Vec<(i32, i32)> = cells(&s).iter().map(|&(x, y)| (2 - x, y)).collect();
    let mut z_cells = cells(&z);
    let mut m = mirrored;
    z_cells.sort();
    m.sort();
    assert_eq!(z_cells, m);
}

// ============== Kick Tests ==============

#[test]
fn test_kick_attempts_scale_with_matrix_side() {
    assert_eq!(kick_offsets(2).count(), 2);
    assert_eq!(kick_offsets(3).count(), 3);
    assert_eq!(kick_offsets(4).count(), 4);
}

#[test]
fn test_rotation_next_to_locked_cells_kicks_away() {
    let mut grid = Grid::new(10, 20);
    // Block column 7, one column clear of a vertical I standing in column 5.
    for y in 0..20 {
        grid.write_cell(7, y, Cell::locked(PieceKind::Z));
    }
    let mut piece = ActivePiece::at(Shape::spawn(PieceKind::I), Position::new(4, 5));
    assert!(!piece.collides_here(&grid));

    // Unkicked the flat I spans columns 4-7; +1 spans 5-8; -1 spans 3-6 and fits.
    assert_eq!(piece.rotate(&grid, RotateDir::Cw), Outcome::Rotated);
    assert_eq!(piece.position(), Position::new(3, 5));
    assert!(!collides(piece.shape(), piece.position(), &grid, 0, 0));
}

#[test]
fn test_rotation_near_ceiling_is_allowed() {
    let grid = Grid::new(10, 20);
    // Flat I one row above the top: rotating makes it stick out above row 0.
    let flat = Shape::spawn(PieceKind::I).rotated(RotateDir::Cw);
    let mut piece = ActivePiece::at(flat, Position::new(3, -1));
    assert!(!piece.collides_here(&grid));
    assert_eq!(piece.rotate(&grid, RotateDir::Ccw), Outcome::Rotated);
    assert!(piece.cells().any(|(_, y)| y < 0));
}
