//! Scoring module - line-clear counter and point accumulator
//!
//! Every cleared row is worth a flat [`LINE_CLEAR_SCORE`] points regardless
//! of how many rows were cleared together.

use crate::types::LINE_CLEAR_SCORE;

/// Points for clearing `lines_cleared` rows in one lock.
pub fn calculate_score(lines_cleared: u32) -> u32 {
    lines_cleared.saturating_mul(LINE_CLEAR_SCORE)
}

/// Running totals for one session. Both counters only grow until reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    total: u32,
    lines: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Account for `lines_cleared` rows and return the points gained.
    pub fn record_clears(&mut self, lines_cleared: u32) -> u32 {
        let gained = calculate_score(lines_cleared);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.total = self.total.saturating_add(gained);
        gained
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
