//! Game events for renderer and audio collaborators
//!
//! The session appends to a queue as things happen; callers drain it with
//! [`Game::take_events`](crate::Game::take_events) once per processed trigger.

use crate::clear::ClearRows;
use crate::collision::Position;
use crate::shapes::Shape;
use crate::types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum GameEvent {
    /// A piece settled into the grid
    Locked {
        kind: PieceKind,
        position: Position,
        /// Full rows the lock produced (0 when no clear starts)
        rows_full: usize,
    },
    /// Rows were marked for clearing; the board is frozen until the
    /// animation-elapsed signal arrives
    ClearStarted { rows: ClearRows },
    /// Marked rows were removed and the score updated
    ClearFinished { rows_cleared: usize, score_delta: u64 },
    /// Hard drop teleport: the piece fell from `from_y` to `to_y` in one step
    HardDropped {
        x: i32,
        from_y: i32,
        to_y: i32,
        shape: Shape,
    },
    /// The stack reached the top
    GameOver { score: u64, total_rows: u32 },
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Locked { .. } => "locked",
            GameEvent::ClearStarted { .. } => "clearStarted",
            GameEvent::ClearFinished { .. } => "clearFinished",
            GameEvent::HardDropped { .. } => "hardDropped",
            GameEvent::GameOver { .. } => "gameOver",
        }
    }
}
