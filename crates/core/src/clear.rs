//! Row-clear coordinator
//!
//! Clearing is split in two so the board can sit frozen while the caller plays
//! its effect:
//!
//! ```text
//! None --lock with full rows--> Pending --animation elapsed--> (collapse) --> None
//! ```
//!
//! While `Pending`, the marked rows carry transient cells and nothing else in
//! the grid may change.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{CellStatus, MAX_ROWS_PER_CLEAR};

/// Row indices of one clear, top to bottom
pub type ClearRows = ArrayVec<usize, MAX_ROWS_PER_CLEAR>;

/// Clear session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ClearPhase {
    #[default]
    None,
    Pending,
    Collapsing,
}

/// The current clear, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClearSession {
    rows: ClearRows,
    phase: ClearPhase,
}

impl ClearSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ClearPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == ClearPhase::Pending
    }

    /// Rows marked by the pending clear (empty when idle)
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Scan the grid after a lock.
    ///
    /// If any row is full, its cells are re-tagged transient, the session
    /// enters `Pending`, and the marked rows are returned. Otherwise the
    /// session stays idle and `None` is returned.
    pub fn begin(&mut self, grid: &mut Grid) -> Option<&[usize]> {
        if self.phase != ClearPhase::None {
            return None;
        }

        let full = scan_full_rows(grid);
        if full.is_empty() {
            return None;
        }

        for &y in &full {
            grid.set_row_status(y, CellStatus::Transient);
        }
        self.rows = full;
        self.phase = ClearPhase::Pending;
        Some(&self.rows)
    }

    /// Collapse the marked rows and return to idle.
    ///
    /// Returns how many rows were removed, or `None` if nothing was pending.
    pub fn finish(&mut self, grid: &mut Grid) -> Option<usize> {
        if self.phase != ClearPhase::Pending {
            return None;
        }
        self.phase = ClearPhase::Collapsing;
        grid.collapse_rows(&self.rows);
        let removed = self.rows.len();

        self.rows.clear();
        self.phase = ClearPhase::None;
        Some(removed)
    }
}

/// Full rows, top to bottom.
///
/// Only the rows under a freshly locked piece can be full (every other full
/// row was cleared earlier), so at most `MAX_ROWS_PER_CLEAR` turn up.
pub fn scan_full_rows(grid: &Grid) -> ClearRows {
    let mut rows = ClearRows::new();
    for y in (0..grid.height() as usize).filter(|&y| grid.is_full_row(y)) {
        if rows.try_push(y).is_err() {
            debug_assert!(false, "more than {} full rows", MAX_ROWS_PER_CLEAR);
            break;
        }
    }
    rows
}
