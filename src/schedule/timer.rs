//! Simulated-clock timer queue.
//!
//! The engine never sleeps. A transition that needs to wait schedules a
//! `DeferredAction` with a delay; the driver advances the clock and runs
//! whatever has come due.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A transition that fires after a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeferredAction {
    /// Turn a mismatched pair face-down and unlock input.
    ResolveMismatch { first: usize, second: usize },

    /// End of the opening reveal: hide every unmatched card.
    HideAllCards,

    /// End of the opening settle time: accept input.
    UnlockInput,
}

/// Sequence number of a scheduled entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// An action waiting for its due time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledAction {
    pub id: TimerId,

    /// Clock reading at which the action fires.
    pub due: Duration,

    pub action: DeferredAction,
}

/// Queue of deferred actions on a simulated clock.
///
/// ## Ordering
///
/// Actions fire in due order; actions due at the same instant fire in
/// the order they were scheduled. There is no cancellation, only
/// [`Scheduler::clear`] when the whole game is replaced.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scheduler {
    now: Duration,
    pending: Vec<ScheduledAction>,
    next_id: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Clock reading `delay` from now, saturating at `Duration::MAX`.
    #[must_use]
    pub fn deadline_after(&self, delay: Duration) -> Duration {
        self.now.checked_add(delay).unwrap_or(Duration::MAX)
    }

    /// Schedule `action` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, action: DeferredAction) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledAction {
            id,
            due: self.deadline_after(delay),
            action,
        });
        id
    }

    /// Remove and return the earliest action due at or before `deadline`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<DeferredAction> {
        let (pos, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= deadline)
            .min_by_key(|(_, entry)| (entry.due, entry.id))?;

        let entry = self.pending.remove(pos);
        if entry.due > self.now {
            self.now = entry.due;
        }
        Some(entry.action)
    }

    /// Move the clock forward to `deadline` without firing anything.
    pub fn settle(&mut self, deadline: Duration) {
        if deadline > self.now {
            self.now = deadline;
        }
    }

    /// Pop everything due within `elapsed` from now, in firing order.
    ///
    /// Actions scheduled while the caller handles the returned list are not
    /// included; drivers that need chained actions use `pop_due` in a loop.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<DeferredAction> {
        let deadline = self.deadline_after(elapsed);
        let mut fired = Vec::new();
        while let Some(action) = self.pop_due(deadline) {
            fired.push(action);
        }
        self.settle(deadline);
        fired
    }

    /// Due time of the next pending action.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|entry| entry.due).min()
    }

    /// Time until the next action fires.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_due().map(|due| due.saturating_sub(self.now))
    }

    #[must_use]
    pub fn pending(&self) -> &[ScheduledAction] {
        &self.pending
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending action. The clock keeps its reading.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
