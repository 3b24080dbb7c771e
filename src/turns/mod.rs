//! Turn resolution: selection, matching, scoring, win detection.
//!
//! `TurnResolver` is the only writer of grid and score state. It reports
//! every visible change through an [`crate::events::EventSink`] and
//! parks its waits on a [`crate::schedule::Scheduler`].

pub mod score;
pub mod resolver;

pub use score::ScoreState;
pub use resolver::{RejectReason, SelectOutcome, SlotView, TurnPhase, TurnResolver};
