//! Game session - ties the engine pieces together
//!
//! A [`Game`] owns the grid, the falling piece, the clear session and the
//! progression state. It only ever changes in response to one of three
//! external triggers, which the caller must deliver one at a time:
//!
//! - [`Game::submit_intent`] for player input
//! - [`Game::tick`] from the caller's gravity clock, every [`Game::drop_interval_ms`]
//! - [`Game::animation_elapsed`] once the caller's clear effect has played
//!
//! Nothing here keeps time. While a clear is pending the board is frozen and
//! input and ticks are reported back as ignored.

use crate::clear::{ClearRows, ClearSession};
use crate::events::GameEvent;
use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::progression::{soft_drop_interval_ms, Progression};
use crate::rng::{PieceSource, UniformSource};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Intent, Outcome, RotateDir, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// One game session
#[derive(Debug, Clone)]
pub struct Game<S = UniformSource> {
    grid: Grid,
    active: Option<ActivePiece>,
    clear: ClearSession,
    progression: Progression,
    source: S,
    /// Rows removed by the most recent lock (0 when it cleared nothing)
    rows_cleared: usize,
    soft_dropping: bool,
    game_over: bool,
    /// Pending events (drained by the caller).
    events: Vec<GameEvent>,
}

impl<S: PieceSource> Game<S> {
    /// Fresh `width x height` session with the first piece already falling
    pub fn new(width: u16, height: u16, source: S) -> Self {
        Self::with_grid(Grid::new(width, height), source)
    }

    /// Session on a preset board.
    ///
    /// Locked cells in `grid` are kept; anything transient is wiped before the
    /// first piece spawns. Rows that are already full are collapsed away
    /// unscored, so a later lock never finds more than four.
    pub fn with_grid(mut grid: Grid, source: S) -> Self {
        grid.clear_transient();
        let full: Vec<usize> = (0..grid.height() as usize)
            .filter(|&y| grid.is_full_row(y))
            .collect();
        grid.collapse_rows(&full);
        let mut game = Self {
            grid,
            active: None,
            clear: ClearSession::new(),
            progression: Progression::new(),
            source,
            rows_cleared: 0,
            soft_dropping: false,
            game_over: false,
            events: Vec::new(),
        };
        game.spawn_piece();
        game
    }

    /// Start over on an empty board of the same size.
    ///
    /// The piece source carries on where it was.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.grid.width(), self.grid.height());
        self.active = None;
        self.clear = ClearSession::new();
        self.progression = Progression::new();
        self.rows_cleared = 0;
        self.soft_dropping = false;
        self.game_over = false;
        self.events.clear();
        self.spawn_piece();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn clear_session(&self) -> &ClearSession {
        &self.clear
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn rows_cleared(&self) -> usize {
        self.rows_cleared
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_clearing(&self) -> bool {
        self.clear.is_pending()
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_dropping
    }

    /// Gravity interval the caller's clock should run at right now
    pub fn drop_interval_ms(&self) -> u32 {
        let base = self.progression.drop_interval_ms();
        if self.soft_dropping {
            soft_drop_interval_ms(base)
        } else {
            base
        }
    }

    /// Row the active piece would land on, if there is one
    pub fn landing_y(&self) -> Option<i32> {
        self.active
            .as_ref()
            .map(|piece| piece.position().y + piece.drop_distance(&self.grid))
    }

    /// Drain queued events, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply one player intent
    pub fn submit_intent(&mut self, intent: Intent) -> Outcome {
        if let Some(ignored) = self.ignored_outcome() {
            return ignored;
        }

        match intent {
            Intent::MoveLeft => self.move_active(-1, 0),
            Intent::MoveRight => self.move_active(1, 0),
            Intent::SoftDropStart => {
                self.soft_dropping = true;
                self.move_active(0, 1)
            }
            Intent::SoftDropRelease => {
                self.soft_dropping = false;
                Outcome::IntervalChanged
            }
            Intent::HardDrop => self.hard_drop(),
            Intent::RotateCw => self.rotate_active(RotateDir::Cw),
            Intent::RotateCcw => self.rotate_active(RotateDir::Ccw),
        }
    }

    /// Gravity step: one row down, locking if the piece is resting
    pub fn tick(&mut self) -> Outcome {
        if let Some(ignored) = self.ignored_outcome() {
            return ignored;
        }
        self.move_active(0, 1)
    }

    /// The caller's clear effect has finished.
    ///
    /// Collapses the marked rows, scores them and spawns the next piece.
    /// Returns how many rows were removed, or `None` if no clear was pending.
    pub fn animation_elapsed(&mut self) -> Option<usize> {
        let removed = self.clear.finish(&mut self.grid)?;
        self.rows_cleared = removed;
        let score_delta = self.progression.apply_clear(removed);
        self.events.push(GameEvent::ClearFinished {
            rows_cleared: removed,
            score_delta,
        });
        self.spawn_piece();
        Some(removed)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Fill `out` in place, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active = self.active.as_ref().map(|piece| ActiveSnapshot {
            kind: piece.kind(),
            position: piece.position(),
            shape: *piece.shape(),
            landing_y: piece.position().y + piece.drop_distance(&self.grid),
        });
        out.score = self.progression.score();
        out.total_rows = self.progression.total_rows();
        out.level = self.progression.level();
        out.clear_rows.clear();
        out.clear_rows.extend_from_slice(self.clear.rows());
        out.clear_phase = self.clear.phase();
        out.game_over = self.game_over;
        out.soft_dropping = self.soft_dropping;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    fn ignored_outcome(&self) -> Option<Outcome> {
        if self.game_over {
            Some(Outcome::IgnoredAfterGameOver)
        } else if self.clear.is_pending() {
            Some(Outcome::IgnoredDuringClear)
        } else {
            None
        }
    }

    fn spawn_piece(&mut self) {
        let piece = ActivePiece::spawn(self.source.next_kind(), self.grid.width());
        self.active = Some(piece);
        self.refresh_projection();
    }

    fn refresh_projection(&mut self) {
        self.grid.clear_transient();
        if let Some(piece) = &self.active {
            piece.project(&mut self.grid);
        }
    }

    fn move_active(&mut self, dx: i32, dy: i32) -> Outcome {
        let Some(mut piece) = self.active else {
            return Outcome::Blocked;
        };
        let outcome = piece.try_move(&self.grid, dx, dy);
        match outcome {
            Outcome::Locked => self.lock(piece),
            Outcome::Moved => {
                self.active = Some(piece);
                self.refresh_projection();
            }
            _ => {}
        }
        outcome
    }

    fn rotate_active(&mut self, dir: RotateDir) -> Outcome {
        let Some(mut piece) = self.active else {
            return Outcome::RotationFailed;
        };
        let outcome = piece.rotate(&self.grid, dir);
        if outcome == Outcome::Rotated {
            self.active = Some(piece);
            self.refresh_projection();
        }
        outcome
    }

    fn hard_drop(&mut self) -> Outcome {
        let Some(mut piece) = self.active else {
            return Outcome::Blocked;
        };
        let distance = piece.drop_distance(&self.grid);
        let from = piece.position();
        piece.drop_and_lock(distance);
        self.events.push(GameEvent::HardDropped {
            x: from.x,
            from_y: from.y,
            to_y: from.y + distance,
            shape: *piece.shape(),
        });
        self.lock(piece);
        Outcome::Locked
    }

    /// Settle a locked piece: merge it, then end the game, start a clear or
    /// spawn the next piece.
    ///
    /// A lock that ends the game skips the row scan: rows it completes stay
    /// locked and unscored, and `Locked` reports `rows_full: 0`.
    fn lock(&mut self, piece: ActivePiece) {
        debug_assert!(piece.is_locked());
        self.active = None;
        self.soft_dropping = false;
        self.grid.clear_transient();
        piece.merge(&mut self.grid);

        if piece.position().y < 1 {
            self.events.push(GameEvent::Locked {
                kind: piece.kind(),
                position: piece.position(),
                rows_full: 0,
            });
            self.game_over = true;
            self.events.push(GameEvent::GameOver {
                score: self.progression.score(),
                total_rows: self.progression.total_rows(),
            });
            return;
        }

        let marked: Option<ClearRows> = self
            .clear
            .begin(&mut self.grid)
            .map(|rows| rows.iter().copied().collect());
        self.events.push(GameEvent::Locked {
            kind: piece.kind(),
            position: piece.position(),
            rows_full: marked.as_ref().map_or(0, |rows| rows.len()),
        });

        match marked {
            Some(rows) => self.events.push(GameEvent::ClearStarted { rows }),
            None => {
                self.rows_cleared = 0;
                self.spawn_piece();
            }
        }
    }
}

impl Default for Game<UniformSource> {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, UniformSource::default())
    }
}
