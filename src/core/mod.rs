//! Core engine types: RNG, configuration, errors.
//!
//! Everything above this module (deck, grid, turns, persistence) is
//! built from these pieces.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::GameRng;
pub use config::{GameConfig, ScoringRules, Timings};
pub use error::{CodecError, ConfigError, CorruptSaveData, StoreError};
