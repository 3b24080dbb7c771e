//! Deferred actions.
//!
//! The two waits in a game (mismatch flip-back and the opening reveal)
//! are `(delay, action)` pairs on a [`Scheduler`]. Input stays locked for
//! the whole wait, so at most one action of each kind is ever pending.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::schedule::{DeferredAction, Scheduler};
//!
//! let mut timers = Scheduler::new();
//! timers.schedule(Duration::from_millis(600), DeferredAction::UnlockInput);
//!
//! assert!(timers.advance(Duration::from_millis(500)).is_empty());
//! assert_eq!(
//!     timers.advance(Duration::from_millis(100)),
//!     vec![DeferredAction::UnlockInput]
//! );
//! ```

mod timer;

pub use timer::{DeferredAction, ScheduledAction, Scheduler, TimerId};
