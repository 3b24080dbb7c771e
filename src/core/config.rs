//! Game configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `ScoringRules`: Points awarded for a match and taken for a mismatch
//! - `Timings`: Delays for the mismatch flip-back and the opening reveal
//! - `GameConfig`: Grid shape, face-set size, seed, and the two above
//!
//! Nothing here is hardcoded in the turn logic; the defaults mirror the
//! classic 5x6 board.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::grid::GridDims;

/// Points for resolving a pair of selections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Added to the score on a match.
    pub match_reward: i64,

    /// Subtracted from the score on a mismatch.
    pub mismatch_penalty: i64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            match_reward: 10,
            mismatch_penalty: 2,
        }
    }
}

/// Delays driving the deferred actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// How long a mismatched pair stays face-up.
    pub mismatch_delay: Duration,

    /// How long every card is shown at the start of a game.
    pub initial_reveal: Duration,

    /// Pause between hiding the cards and accepting input.
    pub reveal_settle: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            mismatch_delay: Duration::from_millis(600),
            initial_reveal: Duration::from_secs(2),
            reveal_settle: Duration::from_millis(500),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid rows for `resume_or_start` and fresh sessions.
    pub rows: u32,

    /// Grid columns.
    pub cols: u32,

    /// Number of distinct faces the host has loaded.
    pub face_count: usize,

    /// Session seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    pub rules: ScoringRules,

    pub timings: Timings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 6,
            face_count: 15,
            seed: None,
            rules: ScoringRules::default(),
            timings: Timings::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration for the given grid and face set.
    pub fn new(rows: u32, cols: u32, face_count: usize) -> Self {
        Self {
            rows,
            cols,
            face_count,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fix the session seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the scoring rules.
    #[must_use]
    pub fn with_rules(mut self, rules: ScoringRules) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the timings.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.timings.mismatch_delay = delay;
        self
    }

    /// Set how long all cards are shown at game start.
    #[must_use]
    pub fn with_initial_reveal(mut self, duration: Duration) -> Self {
        self.timings.initial_reveal = duration;
        self
    }

    /// Grid dimensions as configured.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.rows, self.cols)
    }

    /// Check the grid can be dealt from the configured face set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let total_slots = self.dims().total();
        if total_slots == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if total_slots % 2 != 0 {
            return Err(ConfigError::OddGridSize { total_slots });
        }
        let pairs = total_slots / 2;
        if pairs > self.face_count {
            return Err(ConfigError::InsufficientFaces {
                pairs,
                face_count: self.face_count,
            });
        }
        Ok(())
    }
}
