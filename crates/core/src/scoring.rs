//! Scoring module - match rewards and mismatch penalties
//!
//! The score only moves in two ways: a fixed reward for every matched pair and
//! a fixed penalty for every mismatch. It never drops below zero and has no
//! upper bound.

use crate::types::{MATCH_REWARD, MISMATCH_PENALTY};

/// Running score of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    reward: u32,
    penalty: u32,
}

impl ScoreTracker {
    pub fn new(reward: u32, penalty: u32) -> Self {
        Self {
            score: 0,
            reward,
            penalty,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Apply the match reward and return the new score.
    pub fn reward(&mut self) -> u32 {
        self.score = self.score.saturating_add(self.reward);
        self.score
    }

    /// Apply the mismatch penalty (floored at 0) and return the new score.
    pub fn penalty(&mut self) -> u32 {
        self.score = self.score.saturating_sub(self.penalty);
        self.score
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new(MATCH_REWARD, MISMATCH_PENALTY)
    }
}
