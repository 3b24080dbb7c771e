//! Turn resolution integration tests.
//!
//! These tests drive a full `GameSession` through clicks and simulated
//! time, checking scoring, the flip-back delay, input locking and wins.

use std::time::Duration;

use memory_match::core::GameConfig;
use memory_match::events::GameEvent;
use memory_match::session::GameSession;
use memory_match::turns::{RejectReason, SelectOutcome, SlotView, TurnPhase};

type Session = GameSession<Vec<GameEvent>>;

/// Start a game and skip past the opening reveal.
fn ready_session(rows: u32, cols: u32, face_count: usize, seed: u64) -> Session {
    let config = GameConfig::new(rows, cols, face_count).with_seed(seed);
    let mut session = GameSession::new(config, Vec::new());
    session.start_new_game(rows, cols, face_count).unwrap();
    session.advance(Duration::from_millis(2500));
    session.sink_mut().clear();
    session
}

fn partner(session: &Session, index: usize) -> usize {
    session.grid().unwrap().partner_of(index).unwrap()
}

/// Some slot holding a different face than `index`.
fn stranger(session: &Session, index: usize) -> usize {
    let grid = session.grid().unwrap();
    let face = grid.slot(index).unwrap().face;
    grid.slots().iter().position(|s| s.face != face).unwrap()
}

// =============================================================================
// Opening Reveal Tests
// =============================================================================

/// Test the opening reveal: locked for 2.0 + 0.5, cards hidden at 2.0.
#[test]
fn test_initial_reveal_timing() {
    let mut session = GameSession::new(GameConfig::new(2, 2, 2).with_seed(1), Vec::<GameEvent>::new());
    session.start_new_game(2, 2, 2).unwrap();

    assert!(session.is_input_locked());
    assert_eq!(session.select_card(0), SelectOutcome::Ignored(RejectReason::InputLocked));

    session.advance(Duration::from_millis(1999));
    assert!(session.slot_views().iter().all(|v| matches!(v, SlotView::FaceUp(_))));

    session.advance(Duration::from_millis(1));
    assert!(session.slot_views().iter().all(|v| *v == SlotView::Hidden));
    assert!(session.is_input_locked());

    session.advance(Duration::from_millis(499));
    assert!(session.is_input_locked());

    session.advance(Duration::from_millis(1));
    assert!(!session.is_input_locked());

    let events = session.sink();
    assert!(events.contains(&GameEvent::AllCardsRevealed));
    assert_eq!(events.last(), Some(&GameEvent::AllCardsHidden));
}

// =============================================================================
// Match and Mismatch Tests
// =============================================================================

/// Test that selecting two equal faces matches immediately.
#[test]
fn test_match_scores_without_deferral() {
    let mut session = ready_session(4, 4, 8, 3);
    let other = partner(&session, 0);

    assert_eq!(session.select_card(0), SelectOutcome::Revealed);
    assert_eq!(session.phase(), TurnPhase::OneSelected);

    let outcome = session.select_card(other);
    assert_eq!(outcome, SelectOutcome::Matched { first: 0, second: other, won: false });

    let score = session.score();
    assert_eq!((score.score, score.streak, score.pairs_found), (10, 1, 1));
    assert_eq!(session.pending_actions(), 0);
    assert!(!session.is_input_locked());
    assert_eq!(session.phase(), TurnPhase::Idle);
    assert!(matches!(session.slot_view(0), Some(SlotView::Matched(_))));
    assert!(matches!(session.slot_view(other), Some(SlotView::Matched(_))));
}

/// Test mismatch penalty, lock, and flip-back after the configured delay.
#[test]
fn test_mismatch_flips_back_after_delay() {
    let mut session = ready_session(4, 4, 8, 4);
    let other = stranger(&session, 0);

    session.select_card(0);
    let outcome = session.select_card(other);
    assert_eq!(outcome, SelectOutcome::Mismatched { first: 0, second: other });

    let score = session.score();
    assert_eq!((score.score, score.streak), (-2, 0));
    assert!(session.is_input_locked());
    assert_eq!(session.phase(), TurnPhase::Resolving);
    assert_eq!(session.selection(), &[0, other]);
    assert_eq!(session.time_until_next(), Some(Duration::from_millis(600)));

    // Clicks during the delay are dropped, not queued
    let third = (0..16).find(|&i| i != 0 && i != other).unwrap();
    assert_eq!(session.select_card(third), SelectOutcome::Ignored(RejectReason::InputLocked));

    session.advance(Duration::from_millis(599));
    assert!(session.is_input_locked());

    session.advance(Duration::from_millis(1));
    assert!(!session.is_input_locked());
    assert!(session.selection().is_empty());
    assert_eq!(session.phase(), TurnPhase::Idle);
    assert_eq!(session.slot_view(0), Some(SlotView::Hidden));
    assert_eq!(session.slot_view(other), Some(SlotView::Hidden));
    assert!(!session.grid().unwrap().slot(0).unwrap().matched);

    assert_eq!(
        session.sink().as_slice(),
        &[
            GameEvent::CardRevealed { slot: 0, face: session.grid().unwrap().slot(0).unwrap().face },
            GameEvent::CardRevealed { slot: other, face: session.grid().unwrap().slot(other).unwrap().face },
            GameEvent::MismatchDetected { first: 0, second: other },
            GameEvent::ScoreChanged { score: -2, streak: 0 },
            GameEvent::MismatchResolved { first: 0, second: other },
        ]
    );
}

/// Test that the mismatch delay comes from configuration.
#[test]
fn test_custom_mismatch_delay() {
    let config = GameConfig::new(2, 2, 2)
        .with_seed(8)
        .with_mismatch_delay(Duration::from_secs(1))
        .with_initial_reveal(Duration::from_millis(100));
    let mut session = GameSession::new(config, Vec::<GameEvent>::new());
    session.start_new_game(2, 2, 2).unwrap();
    session.advance(Duration::from_millis(600));
    assert!(!session.is_input_locked());

    let other = stranger(&session, 0);
    session.select_card(0);
    session.select_card(other);

    session.advance(Duration::from_millis(900));
    assert!(session.is_input_locked());
    session.advance(Duration::from_millis(100));
    assert!(!session.is_input_locked());
}

/// Test that re-selecting the only selected card does nothing.
#[test]
fn test_reselect_is_noop() {
    let mut session = ready_session(2, 3, 3, 5);

    session.select_card(2);
    let events_before = session.sink().len();

    assert_eq!(session.select_card(2), SelectOutcome::Ignored(RejectReason::AlreadySelected));
    assert_eq!(session.selection(), &[2]);
    assert_eq!(session.sink().len(), events_before);
}

// =============================================================================
// Win Detection Tests
// =============================================================================

/// Test the 2x2 scenario: two matches win the game.
#[test]
fn test_two_by_two_win() {
    let mut session = ready_session(2, 2, 2, 11);

    let a = partner(&session, 0);
    assert_eq!(session.select_card(0), SelectOutcome::Revealed);
    assert_eq!(session.select_card(a), SelectOutcome::Matched { first: 0, second: a, won: false });

    let rest: Vec<usize> = (0..4).filter(|&i| i != 0 && i != a).collect();
    session.select_card(rest[0]);
    let outcome = session.select_card(rest[1]);

    assert_eq!(outcome, SelectOutcome::Matched { first: rest[0], second: rest[1], won: true });
    assert!(session.is_won());
    assert!(session.is_input_locked());
    assert_eq!(session.score().score, 20);
    assert_eq!(session.score().streak, 2);

    let events = session.sink();
    assert_eq!(events.last(), Some(&GameEvent::GameWon));
    assert!(events.contains(&GameEvent::MatchResolved { first: 0, second: a }));

    // Game over: nothing selectable
    assert_eq!(session.select_card(0), SelectOutcome::Ignored(RejectReason::AlreadyMatched));
}

/// Test that win detection agrees with the number of recorded matches.
#[test]
fn test_all_matched_iff_all_pairs_scored() {
    let mut session = ready_session(4, 6, 12, 21);
    let pairs = 12;

    let mut done = vec![false; 24];
    for i in 0..24 {
        if done[i] {
            continue;
        }
        let j = partner(&session, i);

        // Throw in a mismatch first to exercise the streak reset
        if let Some(k) = (0..24).find(|&k| !done[k] && k != i && k != j) {
            session.select_card(i);
            session.select_card(k);
            session.advance(Duration::from_secs(1));
        }

        session.select_card(i);
        session.select_card(j);
        done[i] = true;
        done[j] = true;

        let found = session.score().pairs_found as usize;
        assert_eq!(session.grid().unwrap().all_matched(), found == pairs);
    }

    assert!(session.is_won());
    assert_eq!(session.score().pairs_found as usize, pairs);
    // Every match but the last followed a mismatch
    assert_eq!(session.score().streak, 2);
}

// =============================================================================
// Game Lifecycle Tests
// =============================================================================

/// Test that a new game discards a pending flip-back.
#[test]
fn test_new_game_discards_pending_actions() {
    let mut session = ready_session(2, 3, 3, 6);
    let other = stranger(&session, 0);
    session.select_card(0);
    session.select_card(other);
    assert_eq!(session.pending_actions(), 1);

    session.restart().unwrap();

    // Only the opening reveal is pending
    assert_eq!(session.pending_actions(), 1);
    assert_eq!(session.score().score, 0);
    assert!(session.selection().is_empty());

    assert!(session.is_input_locked());

    session.sink_mut().clear();
    session.advance(Duration::from_secs(3));
    assert_eq!(session.sink().as_slice(), &[GameEvent::AllCardsHidden]);
}
