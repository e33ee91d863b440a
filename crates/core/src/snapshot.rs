//! Read-only game snapshots
//!
//! Plain owned data for renderers, audio triggers and `--json` dumps. The
//! grid already carries the falling piece as transient cells, so a renderer
//! can draw `cells` as-is and only needs `active` for extras like the ghost.

use crate::clear::ClearPhase;
use crate::collision::Position;
use crate::shapes::Shape;
use crate::types::{Cell, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub position: Position,
    pub shape: Shape,
    /// Row the piece would occupy after a hard drop
    pub landing_y: i32,
}

impl ActiveSnapshot {
    /// Absolute cells at `y`, usually `position.y` or `landing_y`
    pub fn cells_at(&self, y: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        let x = self.position.x;
        self.shape.cells().map(move |(sx, sy)| (x + sx, y + sy))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major cells, `y * width + x`
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u64,
    pub total_rows: u32,
    pub level: u32,
    /// Rows marked by a pending clear, top to bottom
    pub clear_rows: Vec<usize>,
    pub clear_phase: ClearPhase,
    pub game_over: bool,
    pub soft_dropping: bool,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        let w = self.width as usize;
        self.cells.get(y * w..(y + 1) * w)
    }

    pub fn is_clearing(&self) -> bool {
        !self.clear_rows.is_empty()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.is_clearing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let mut snap = GameSnapshot {
            width: 4,
            height: 2,
            cells: vec![Cell::EMPTY; 8],
            ..Default::default()
        };
        snap.cells[5] = Cell::locked(PieceKind::L);
        assert_eq!(snap.cell(1, 1), Some(Cell::locked(PieceKind::L)));
        assert_eq!(snap.cell(4, 0), None);
        assert_eq!(snap.cell(0, -1), None);
        assert_eq!(snap.row(1).map(|r| r.len()), Some(4));
        assert!(snap.row(2).is_none());
    }

    #[test]
    fn clearing_snapshot_is_not_playable() {
        let snap = GameSnapshot {
            clear_rows: vec![19],
            clear_phase: ClearPhase::Pending,
            ..Default::default()
        };
        assert!(snap.is_clearing());
        assert!(!snap.playable());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_serializes_to_json() {
        use crate::{Game, ScriptedSource};

        let game = Game::new(4, 6, ScriptedSource::new([PieceKind::O]));
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["width"], 4);
        assert_eq!(json["clear_phase"], "none");
        assert_eq!(json["active"]["kind"], "O");
        assert_eq!(json["cells"].as_array().map(|c| c.len()), Some(24));
    }
}
