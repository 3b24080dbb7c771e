//! The game session: one explicitly owned game manager.

use std::time::Duration;

use log::{error, info, warn};

use crate::cards::generate_deck;
use crate::core::{ConfigError, CorruptSaveData, GameConfig, GameRng};
use crate::events::{EventSink, GameEvent};
use crate::grid::{GridDims, GridState};
use crate::persistence::{decode, encode, SaveRecord, SaveStore};
use crate::schedule::Scheduler;
use crate::turns::{RejectReason, ScoreState, SelectOutcome, SlotView, TurnPhase, TurnResolver};

/// Owns everything about the game being played.
///
/// The host constructs one session, hands it an [`EventSink`] for the
/// presentation layer and, optionally, a [`SaveStore`], then drives it
/// with clicks ([`select_card`](Self::select_card)) and elapsed time
/// ([`advance`](Self::advance)).
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_match::core::GameConfig;
/// use memory_match::events::GameEvent;
/// use memory_match::session::GameSession;
///
/// let config = GameConfig::new(2, 2, 2).with_seed(7);
/// let mut session = GameSession::new(config, Vec::<GameEvent>::new());
/// session.start_new_game(2, 2, 2).unwrap();
///
/// // Input opens once the opening reveal is over
/// assert!(session.is_input_locked());
/// session.advance(Duration::from_millis(2500));
/// assert!(!session.is_input_locked());
/// ```
pub struct GameSession<S: EventSink> {
    config: GameConfig,
    /// Size of the host's face set, used to validate saves.
    face_count: usize,
    rng: GameRng,
    turns: Option<TurnResolver>,
    /// Seed the current grid was dealt from.
    game_seed: Option<u64>,
    timers: Scheduler,
    sink: S,
    store: Option<Box<dyn SaveStore>>,
}

impl<S: EventSink> GameSession<S> {
    /// Create a session with no game in progress.
    pub fn new(config: GameConfig, sink: S) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            face_count: config.face_count,
            config,
            rng,
            turns: None,
            game_seed: None,
            timers: Scheduler::new(),
            sink,
            store: None,
        }
    }

    /// Attach a save store; every committed transition is written to it.
    #[must_use]
    pub fn with_store(mut self, store: impl SaveStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    // === Game lifecycle ===

    /// Deal a new grid and start the opening reveal.
    ///
    /// On error the current game, if any, is left as it was.
    pub fn start_new_game(&mut self, rows: u32, cols: u32, face_count: usize) -> Result<(), ConfigError> {
        let dims = GridDims::new(rows, cols);
        // Rejected starts must not consume a fork
        GameConfig::new(rows, cols, face_count).validate().map_err(|e| {
            error!("cannot start a {} game: {}", dims, e);
            e
        })?;

        let mut deck_rng = self.rng.fork();
        let seed = deck_rng.seed();
        let faces = generate_deck(dims.total(), face_count, &mut deck_rng)?;
        let grid = GridState::new(dims, faces)?;

        self.face_count = face_count;
        self.game_seed = Some(seed);
        self.timers.clear();

        let mut turns = TurnResolver::new(grid, self.config.rules, self.config.timings);
        self.sink.emit(GameEvent::GameStarted { rows, cols });
        self.sink.emit(GameEvent::ScoreChanged { score: 0, streak: 0 });
        turns.begin_initial_reveal(&mut self.sink, &mut self.timers);
        self.turns = Some(turns);

        info!("started {} game with {} pairs (seed {})", dims, dims.pairs(), seed);
        self.autosave();
        Ok(())
    }

    /// Start over on the same grid shape and face set as the current game,
    /// or the configured ones before the first game.
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        let dims = self.grid().map_or_else(|| self.config.dims(), GridState::dims);
        self.start_new_game(dims.rows, dims.cols, self.face_count)
    }

    /// Handle a click on a slot.
    ///
    /// Clicks that cannot be honoured right now come back as
    /// [`SelectOutcome::Ignored`] and change nothing.
    pub fn select_card(&mut self, index: usize) -> SelectOutcome {
        let Some(turns) = self.turns.as_mut() else {
            return SelectOutcome::Ignored(RejectReason::OutOfRange);
        };

        let outcome = turns.select_card(index, &mut self.sink, &mut self.timers);
        if outcome.is_committed() {
            self.autosave();
        }
        outcome
    }

    /// Move the clock forward, running every deferred action that comes due.
    ///
    /// Actions scheduled by an action fired here also run if they fall due
    /// within the same window. Returns how many actions ran.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let deadline = self.timers.deadline_after(elapsed);
        let mut fired = 0;
        while let Some(action) = self.timers.pop_due(deadline) {
            if let Some(turns) = self.turns.as_mut() {
                turns.apply_deferred(action, &mut self.sink, &mut self.timers);
            }
            fired += 1;
        }
        self.timers.settle(deadline);
        fired
    }

    // === Persistence ===

    /// Snapshot the current game. `None` before the first game.
    #[must_use]
    pub fn save_game(&self) -> Option<SaveRecord> {
        let turns = self.turns.as_ref()?;
        Some(encode(turns.grid(), turns.score(), self.game_seed))
    }

    /// Replace the current game with a saved one.
    ///
    /// Returns false and leaves the current game untouched if the record
    /// is corrupt; the host should fall back to a new game.
    pub fn load_game(&mut self, record: &SaveRecord) -> bool {
        match self.try_load_game(record) {
            Ok(()) => true,
            Err(e) => {
                warn!("rejected save: {}", e);
                false
            }
        }
    }

    /// Like [`load_game`](Self::load_game) but reports why a save was rejected.
    pub fn try_load_game(&mut self, record: &SaveRecord) -> Result<(), CorruptSaveData> {
        let restored = decode(record, self.face_count)?;
        let dims = restored.grid.dims();

        self.timers.clear();
        self.game_seed = restored.seed;
        let turns = TurnResolver::restore(
            restored.grid,
            restored.score,
            self.config.rules,
            self.config.timings,
        );

        self.sink.emit(GameEvent::GameRestored { rows: dims.rows, cols: dims.cols });
        self.sink.emit(GameEvent::ScoreChanged {
            score: restored.score.score,
            streak: restored.score.streak,
        });
        if turns.is_won() {
            self.sink.emit(GameEvent::GameWon);
        }
        self.turns = Some(turns);

        info!("restored {} game, score {}", dims, restored.score.score);
        Ok(())
    }

    /// Continue the stored game if there is a valid one, otherwise start a
    /// new game with the configured grid.
    ///
    /// Returns true when a saved game was resumed.
    pub fn resume_or_start(&mut self) -> Result<bool, ConfigError> {
        if let Some(record) = self.load_from_store() {
            if self.load_game(&record) {
                return Ok(true);
            }
        }
        self.restart()?;
        Ok(false)
    }

    /// Whether the store holds a game to continue.
    #[must_use]
    pub fn has_saved_game(&self) -> bool {
        self.store.as_ref().is_some_and(|store| store.has_save())
    }

    /// Delete the stored game.
    pub fn discard_saved_game(&mut self) {
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.clear() {
                warn!("could not clear save: {}", e);
            }
        }
    }

    /// Final save before the host exits.
    pub fn shutdown(&mut self) {
        self.autosave();
    }

    fn load_from_store(&self) -> Option<SaveRecord> {
        let store = self.store.as_ref()?;
        match store.load() {
            Ok(record) => record,
            Err(e) => {
                warn!("could not read save: {}", e);
                None
            }
        }
    }

    fn autosave(&mut self) {
        let Some(record) = self.save_game() else {
            return;
        };
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.store(&record) {
                warn!("autosave failed: {}", e);
            }
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Seed the current grid was dealt from.
    #[must_use]
    pub fn game_seed(&self) -> Option<u64> {
        self.game_seed
    }

    #[must_use]
    pub fn turns(&self) -> Option<&TurnResolver> {
        self.turns.as_ref()
    }

    #[must_use]
    pub fn grid(&self) -> Option<&GridState> {
        self.turns.as_ref().map(TurnResolver::grid)
    }

    /// Score of the current game; zero before the first game.
    #[must_use]
    pub fn score(&self) -> ScoreState {
        self.turns.as_ref().map(|t| *t.score()).unwrap_or_default()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turns.as_ref().map_or(TurnPhase::Idle, TurnResolver::phase)
    }

    #[must_use]
    pub fn selection(&self) -> &[usize] {
        self.turns.as_ref().map(TurnResolver::selection).unwrap_or(&[])
    }

    /// Locked during waits, after a win, and when no game is running.
    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.turns.as_ref().map_or(true, TurnResolver::is_input_locked)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.turns.as_ref().is_some_and(TurnResolver::is_won)
    }

    #[must_use]
    pub fn slot_view(&self, index: usize) -> Option<SlotView> {
        self.turns.as_ref()?.slot_view(index)
    }

    /// Views of every slot, row-major.
    #[must_use]
    pub fn slot_views(&self) -> Vec<SlotView> {
        match self.turns.as_ref() {
            Some(turns) => (0..turns.grid().len()).filter_map(|i| turns.slot_view(i)).collect(),
            None => Vec::new(),
        }
    }

    /// Number of deferred actions waiting on the clock.
    #[must_use]
    pub fn pending_actions(&self) -> usize {
        self.timers.pending_count()
    }

    /// Time until the next deferred action fires.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
