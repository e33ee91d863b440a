//! Core game logic - pure, deterministic, and testable
//!
//! The falling-block engine: grid, pieces, collisions, row clears and scoring.
//! It has **no dependencies** on terminals, clocks or I/O:
//!
//! - **Deterministic**: the same piece source yields the same game
//! - **Trigger-driven**: state only changes on an intent, a gravity tick or an
//!   animation-elapsed signal, all delivered by the caller
//! - **Observable**: every request returns a typed [`Outcome`](types::Outcome)
//!   instead of failing
//!
//! # Module Structure
//!
//! - [`grid`]: the well, a row-major matrix of cells with row collapse
//! - [`shapes`]: the seven piece matrices and their rotations
//! - [`collision`]: walls, floor and locked-cell checks
//! - [`piece`]: the falling piece, moves, locking and wall-kicked rotation
//! - [`clear`]: two-phase row clearing (mark, then collapse on signal)
//! - [`progression`]: score, cumulative rows, level and gravity interval
//! - [`rng`]: seedable and scripted piece sources
//! - [`game_state`]: the session tying all of the above together
//!
//! # Rules
//!
//! - Pieces spawn centered on row 0; cells above the top are open space
//! - A blocked descent locks the piece; a blocked sideways move does not
//! - Full rows are marked first and only removed once the caller reports its
//!   clear animation is done; the board is frozen in between
//! - 40 / 100 / 300 / 1200 points for 1-4 rows, times `level + 1`
//! - Level is `total_rows / 10`; gravity is `1000 / (level + 1) + 200` ms
//! - Locking a piece that still touches row 0 ends the game
//!
//! # Example
//!
//! ```
//! use timelord_tetris_core::{Game, ScriptedSource};
//! use timelord_tetris_types::{Intent, Outcome, PieceKind};
//!
//! let mut game = Game::new(10, 20, ScriptedSource::new([PieceKind::O]));
//!
//! assert_eq!(game.submit_intent(Intent::MoveLeft), Outcome::Moved);
//! assert_eq!(game.submit_intent(Intent::HardDrop), Outcome::Locked);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.cells.iter().filter(|c| c.is_locked()).count(), 4);
//! assert_eq!(snap.score, 0);
//! ```

pub mod clear;
pub mod collision;
pub mod events;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod progression;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use timelord_tetris_types as types;

// Re-export commonly used types for convenience
pub use clear::{ClearPhase, ClearRows, ClearSession};
pub use collision::{collides, Position};
pub use events::GameEvent;
pub use game_state::Game;
pub use grid::Grid;
pub use piece::ActivePiece;
pub use progression::Progression;
pub use rng::{PieceSource, ScriptedSource, SimpleRng, UniformSource};
pub use shapes::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
