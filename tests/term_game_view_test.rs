use timelord_tetris::core::{Game, Grid, ScriptedSource};
use timelord_tetris::term::{encode_full_into, Effects, GameView, Viewport};
use timelord_tetris::types::{Cell, Intent, PieceKind};

fn playing() -> Effects {
    Effects {
        started: true,
        ..Effects::default()
    }
}

#[test]
fn term_view_renders_border_corners() {
    let game = Game::new(10, 20, ScriptedSource::new([PieceKind::T]));
    let view = GameView::default();

    // 10*2 by 20*1 cells plus the border => 22x22
    let fb = view.render(&game.snapshot(), &playing(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut rows = vec![".........."; 20];
    rows[19] = "I.........";
    let grid = Grid::from_rows(&rows).unwrap();
    let game = Game::with_grid(grid, ScriptedSource::new([PieceKind::O]));
    let mut snap = game.snapshot();
    assert_eq!(snap.cell(0, 19), Some(Cell::locked(PieceKind::I)));
    snap.active = None;

    let fb = GameView::default().render(&snap, &playing(), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let y0 = 1 + 19;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_follows_custom_well_size() {
    let game = Game::new(6, 8, ScriptedSource::new([PieceKind::O]));
    let fb = GameView::default().render(&game.snapshot(), &playing(), Viewport::new(14, 10));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 9).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_ghost_below_piece() {
    let mut game = Game::new(10, 20, ScriptedSource::new([PieceKind::O]));
    game.submit_intent(Intent::MoveLeft);
    let fb = GameView::default().render(&game.snapshot(), &playing(), Viewport::new(22, 22));
    // O at x=2 lands on rows 18-19.
    assert_eq!(fb.get(1 + 2 * 2, 1 + 19).unwrap().ch, '░');
    assert_eq!(fb.get(1 + 2 * 2, 1).unwrap().ch, '█');
}

#[test]
fn full_frame_encoding_contains_panel_text() {
    let game = Game::new(10, 20, ScriptedSource::new([PieceKind::T]));
    let fb = GameView::default().render(&game.snapshot(), &playing(), Viewport::new(60, 24));
    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("SCORE"));
    assert!(text.contains("LEVEL"));
}
