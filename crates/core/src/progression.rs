//! Progression module - score, rows, level, and gravity
//!
//! Classic line-clear scoring: 40 / 100 / 300 / 1200 points for 1-4 rows,
//! multiplied by (level + 1) using the level *before* the clear is applied.
//! The level is always recomputed from the running row total, so batching
//! does not matter: 4 + 4 + 2 rows ends on the same level as 10 at once.

use crate::types::{
    BASE_DROP_MS, DROP_FLOOR_MS, LINE_POINTS, MAX_ROWS_PER_CLEAR, ROWS_PER_LEVEL,
    SOFT_DROP_DIVISOR,
};

/// Score, cumulative rows, and level. Every field only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    score: u64,
    total_rows: u32,
    level: u32,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn total_rows(&self) -> u32 {
        self.total_rows
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Apply a completed clear and return the points it scored.
    ///
    /// `rows_cleared == 0` changes nothing.
    pub fn apply_clear(&mut self, rows_cleared: usize) -> u64 {
        if rows_cleared == 0 {
            return 0;
        }
        let points = line_clear_points(rows_cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.total_rows = self.total_rows.saturating_add(rows_cleared as u32);
        self.level = level_for_rows(self.total_rows);
        points
    }

    /// Gravity interval for the current level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }
}

/// Points for clearing `rows` rows at `level`
pub fn line_clear_points(rows: usize, level: u32) -> u64 {
    if rows == 0 {
        return 0;
    }
    let base = LINE_POINTS[rows.min(MAX_ROWS_PER_CLEAR) - 1] as u64;
    base * (level as u64 + 1)
}

/// Level increases every 10 cumulative rows
pub fn level_for_rows(total_rows: u32) -> u32 {
    total_rows / ROWS_PER_LEVEL
}

/// Gravity interval: `1000 / (level + 1) + 200` ms
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS / level.saturating_add(1) + DROP_FLOOR_MS
}

/// Accelerated interval while soft drop is held
pub fn soft_drop_interval_ms(base_interval: u32) -> u32 {
    (base_interval / SOFT_DROP_DIVISOR).max(1)
}
