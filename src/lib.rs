//! # memory-match
//!
//! Game-state and turn-resolution engine for a memory/matching card game.
//!
//! A grid of face-down cards holds randomly dealt pairs. The player turns
//! two cards at a time: pairs stay up, mismatches flip back after a delay,
//! and score/streak accumulate until every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never draws, animates or plays
//!    sound. It emits `GameEvent`s to an `EventSink` and accepts clicks.
//!
//! 2. **No Hidden Clock**: Waits are `(delay, action)` pairs on a
//!    `Scheduler`. The host advances time, so tests fast-forward.
//!
//! 3. **Explicit Ownership**: One `GameSession` per game manager, built and
//!    passed around by the host. No globals.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Face ids, card slots, deck generation
//! - `grid`: Grid dimensions and slot state
//! - `events`: Events and the presentation sink
//! - `schedule`: Deferred actions on a simulated clock
//! - `turns`: Selection state machine, scoring, win detection
//! - `persistence`: Save records, codec, save stores
//! - `session`: The host-facing game session

pub mod core;
pub mod cards;
pub mod grid;
pub mod events;
pub mod schedule;
pub mod turns;
pub mod persistence;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameRng,
    GameConfig, ScoringRules, Timings,
    ConfigError, CorruptSaveData, CodecError, StoreError,
};

pub use crate::cards::{CardSlot, FaceId, generate_deck};

pub use crate::grid::{GridDims, GridState, Position};

pub use crate::events::{EventSink, GameEvent, NullSink};

pub use crate::schedule::{DeferredAction, Scheduler};

pub use crate::turns::{RejectReason, ScoreState, SelectOutcome, SlotView, TurnPhase, TurnResolver};

pub use crate::persistence::{
    decode, encode, JsonFileStore, MemoryStore, RestoredGame, SaveRecord, SaveStore,
};

pub use crate::session::GameSession;
