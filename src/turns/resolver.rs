//! Turn resolution: the selection/comparison state machine.
//!
//! ```text
//!            select             select (2nd)
//!   Idle ───────────▶ OneSelected ─────────▶ Resolving
//!    ▲                                         │
//!    ├──────────── match (immediate) ──────────┤
//!    └──────── ResolveMismatch (deferred) ─────┘
//! ```
//!
//! An input lock overlays every phase: it is held while a pair is being
//! resolved, during the opening reveal, and for good once the game is
//! won. Selections while locked are dropped, not queued.
//!
//! Scoring and win detection happen at selection time. Only the visual
//! flip-back of a mismatch waits for the timer.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::score::ScoreState;
use crate::cards::FaceId;
use crate::core::{ScoringRules, Timings};
use crate::events::{EventSink, GameEvent};
use crate::grid::GridState;
use crate::schedule::{DeferredAction, Scheduler};

/// Where the current turn is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No card face-up.
    #[default]
    Idle,
    /// One unmatched card face-up.
    OneSelected,
    /// Two cards face-up, waiting for the flip-back.
    Resolving,
}

/// Why a selection was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    OutOfRange,
    AlreadyMatched,
    InputLocked,
    AlreadySelected,
}

/// Result of [`TurnResolver::select_card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(RejectReason),

    /// First card of a pair turned face-up.
    Revealed,

    /// Second card completed a pair.
    Matched { first: usize, second: usize, won: bool },

    /// Second card differs; a flip-back is scheduled.
    Mismatched { first: usize, second: usize },
}

impl SelectOutcome {
    /// Whether the selection committed a score change worth saving.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. } | SelectOutcome::Mismatched { .. })
    }
}

/// What the presentation layer may show for a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotView {
    /// Face-down; the face stays private to the engine.
    Hidden,
    /// Face-up but not yet matched.
    FaceUp(FaceId),
    Matched(FaceId),
}

/// Owns the grid, score and selection of one game and applies turns.
#[derive(Clone, Debug)]
pub struct TurnResolver {
    grid: GridState,
    score: ScoreState,
    selection: SmallVec<[usize; 2]>,
    phase: TurnPhase,
    input_locked: bool,
    /// Opening reveal in progress: every card is face-up.
    revealing_all: bool,
    rules: ScoringRules,
    timings: Timings,
}

impl TurnResolver {
    /// Start resolving turns on a freshly dealt grid.
    #[must_use]
    pub fn new(grid: GridState, rules: ScoringRules, timings: Timings) -> Self {
        Self::restore(grid, ScoreState::new(), rules, timings)
    }

    /// Resume a game from restored state.
    ///
    /// Nothing is face-up and nothing is pending. Input starts unlocked
    /// unless the restored game is already won.
    #[must_use]
    pub fn restore(grid: GridState, score: ScoreState, rules: ScoringRules, timings: Timings) -> Self {
        let input_locked = grid.all_matched();
        Self {
            grid,
            score,
            selection: SmallVec::new(),
            phase: TurnPhase::Idle,
            input_locked,
            revealing_all: false,
            rules,
            timings,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    #[must_use]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Slots currently face-up and unmatched, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.grid.all_matched()
    }

    /// Presentation view of a slot. `None` past the end of the grid.
    #[must_use]
    pub fn slot_view(&self, index: usize) -> Option<SlotView> {
        let slot = self.grid.slot(index)?;
        let view = if slot.matched {
            SlotView::Matched(slot.face)
        } else if self.revealing_all || self.selection.contains(&index) {
            SlotView::FaceUp(slot.face)
        } else {
            SlotView::Hidden
        };
        Some(view)
    }

    // === Transitions ===

    /// Turn a card face-up and, if it is the second of a pair, resolve.
    pub fn select_card(
        &mut self,
        index: usize,
        sink: &mut dyn EventSink,
        timers: &mut Scheduler,
    ) -> SelectOutcome {
        if let Err(reason) = self.check_selectable(index) {
            debug!("selection of slot {} ignored: {:?}", index, reason);
            return SelectOutcome::Ignored(reason);
        }

        let face = self.grid.slots()[index].face;
        self.selection.push(index);

        if self.selection.len() == 1 {
            self.phase = TurnPhase::OneSelected;
            sink.emit(GameEvent::CardRevealed { slot: index, face });
            return SelectOutcome::Revealed;
        }

        self.phase = TurnPhase::Resolving;
        self.input_locked = true;
        sink.emit(GameEvent::CardRevealed { slot: index, face });

        let first = self.selection[0];
        let second = index;
        let first_face = self.grid.slots()[first].face;

        if first_face == face {
            self.resolve_match(first, second, sink)
        } else {
            self.score.record_mismatch(&self.rules);
            debug!("mismatch on slots {} and {}, score {}", first, second, self.score.score);
            sink.emit(GameEvent::MismatchDetected { first, second });
            self.emit_score(sink);
            timers.schedule(
                self.timings.mismatch_delay,
                DeferredAction::ResolveMismatch { first, second },
            );
            SelectOutcome::Mismatched { first, second }
        }
    }

    fn check_selectable(&self, index: usize) -> Result<(), RejectReason> {
        let slot = self.grid.slot(index).ok_or(RejectReason::OutOfRange)?;
        if slot.matched {
            return Err(RejectReason::AlreadyMatched);
        }
        if self.input_locked {
            return Err(RejectReason::InputLocked);
        }
        if self.selection.contains(&index) {
            return Err(RejectReason::AlreadySelected);
        }
        Ok(())
    }

    fn resolve_match(&mut self, first: usize, second: usize, sink: &mut dyn EventSink) -> SelectOutcome {
        self.grid.set_matched(first);
        self.grid.set_matched(second);
        self.score.record_match(&self.rules);
        self.selection.clear();
        self.phase = TurnPhase::Idle;
        self.input_locked = false;

        debug!("match on slots {} and {}, streak {}", first, second, self.score.streak);
        sink.emit(GameEvent::MatchResolved { first, second });
        self.emit_score(sink);

        let won = self.grid.all_matched();
        if won {
            self.input_locked = true;
            info!("all {} pairs found, final score {}", self.score.pairs_found, self.score.score);
            sink.emit(GameEvent::GameWon);
        }
        SelectOutcome::Matched { first, second, won }
    }

    /// Lock input and show every card; schedules the hide.
    pub fn begin_initial_reveal(&mut self, sink: &mut dyn EventSink, timers: &mut Scheduler) {
        self.input_locked = true;
        self.revealing_all = true;
        sink.emit(GameEvent::AllCardsRevealed);
        timers.schedule(self.timings.initial_reveal, DeferredAction::HideAllCards);
    }

    /// Run a deferred action that has come due.
    pub fn apply_deferred(
        &mut self,
        action: DeferredAction,
        sink: &mut dyn EventSink,
        timers: &mut Scheduler,
    ) {
        match action {
            DeferredAction::ResolveMismatch { first, second } => {
                self.selection.clear();
                self.phase = TurnPhase::Idle;
                self.input_locked = self.grid.all_matched();
                sink.emit(GameEvent::MismatchResolved { first, second });
            }
            DeferredAction::HideAllCards => {
                self.revealing_all = false;
                sink.emit(GameEvent::AllCardsHidden);
                timers.schedule(self.timings.reveal_settle, DeferredAction::UnlockInput);
            }
            DeferredAction::UnlockInput => {
                self.input_locked = self.grid.all_matched();
            }
        }
    }

    fn emit_score(&self, sink: &mut dyn EventSink) {
        sink.emit(GameEvent::ScoreChanged {
            score: self.score.score,
            streak: self.score.streak,
        });
    }
}
