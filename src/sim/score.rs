//! Score tracking
//!
//! +1 for every asteroid that makes it past the ship, back to zero on any
//! contact. The host listens for `GameEvent::ScoreChanged` to redraw.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u64,
    /// Highest score reached this session
    best: u64,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` points, returning the new score
    pub fn increment(&mut self, n: u64) -> u64 {
        self.score = self.score.saturating_add(n);
        self.best = self.best.max(self.score);
        self.score
    }

    /// Drop back to zero, returning the new score
    pub fn reset(&mut self) -> u64 {
        self.score = 0;
        self.score
    }

    pub fn current(&self) -> u64 {
        self.score
    }

    pub fn best(&self) -> u64 {
        self.best
    }
}
