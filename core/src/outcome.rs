use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Active,
    Won,
    TimedOut,
}

impl RoundState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::TimedOut)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Active
    }
}

/// Score and pair counting, and the single authority on how a round ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutcomeTracker {
    score: Saturating<u32>,
    matched_pairs: CellCount,
    total_pairs: CellCount,
    reward: u32,
    state: RoundState,
}

impl OutcomeTracker {
    pub fn new(total_pairs: CellCount, reward: u32) -> Self {
        Self {
            score: Saturating(0),
            matched_pairs: 0,
            total_pairs,
            reward,
            state: Default::default(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score.0
    }

    pub fn matched_pairs(&self) -> CellCount {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> CellCount {
        self.total_pairs
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs >= self.total_pairs
    }

    /// Credits a confirmed match. Returns whether every pair is now matched.
    pub fn record_match(&mut self) -> bool {
        if self.state.is_finished() {
            log::warn!("Match recorded after round ended, ignored");
            return false;
        }
        self.score += self.reward;
        self.matched_pairs = self.matched_pairs.saturating_add(1);
        self.is_complete()
    }

    /// Moves the round to its final state. Only the first call has any effect.
    pub fn finish(&mut self, state: RoundState) -> bool {
        if self.state.is_finished() || !state.is_finished() {
            return false;
        }
        self.state = state;
        log::debug!(
            "Round ended {:?}, score: {}, pairs: {}/{}",
            state,
            self.score.0,
            self.matched_pairs,
            self.total_pairs
        );
        true
    }
}
