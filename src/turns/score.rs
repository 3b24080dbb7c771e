//! Score and streak tracking.

use serde::{Deserialize, Serialize};

use crate::core::ScoringRules;

/// Running score of a game.
///
/// Mutated only by the turn resolver. `score` may go negative after
/// enough mismatches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: i64,

    /// Consecutive matches since the last mismatch.
    pub streak: u32,

    /// Pairs found this game.
    pub pairs_found: u32,
}

impl ScoreState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_match(&mut self, rules: &ScoringRules) {
        self.score += rules.match_reward;
        self.streak += 1;
        self.pairs_found += 1;
    }

    pub fn record_mismatch(&mut self, rules: &ScoringRules) {
        self.score -= rules.mismatch_penalty;
        self.streak = 0;
    }
}
