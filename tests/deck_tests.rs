//! Deck generation tests.
//!
//! These tests verify that dealt decks are always properly paired and
//! that the deal is uniform over every valid arrangement.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use memory_match::cards::{generate_deck, FaceId};
use memory_match::core::{ConfigError, GameRng};

fn face_counts(deck: &[FaceId]) -> FxHashMap<FaceId, usize> {
    let mut counts = FxHashMap::default();
    for &face in deck {
        *counts.entry(face).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// Pairing Properties
// =============================================================================

proptest! {
    /// Every face in a valid deal appears exactly twice, with total/2 distinct faces.
    #[test]
    fn prop_deck_is_paired(rows in 1u32..8, cols in 1u32..8, extra in 0usize..10, seed in any::<u64>()) {
        let total = (rows * cols) as usize;
        prop_assume!(total % 2 == 0);
        let face_count = total / 2 + extra;

        let deck = generate_deck(total, face_count, &mut GameRng::new(seed)).unwrap();
        let counts = face_counts(&deck);

        prop_assert_eq!(deck.len(), total);
        prop_assert_eq!(counts.len(), total / 2);
        prop_assert!(counts.values().all(|&c| c == 2));
        prop_assert!(deck.iter().all(|f| f.index() < face_count));
    }

    /// Odd grids never deal.
    #[test]
    fn prop_odd_total_fails(half in 0usize..50, face_count in 0usize..100, seed in any::<u64>()) {
        let total = half * 2 + 1;
        prop_assert_eq!(
            generate_deck(total, face_count, &mut GameRng::new(seed)),
            Err(ConfigError::OddGridSize { total_slots: total })
        );
    }

    /// Too few faces never deal.
    #[test]
    fn prop_insufficient_faces_fails(pairs in 1usize..40, short in 1usize..40, seed in any::<u64>()) {
        let face_count = pairs.saturating_sub(short);
        prop_assume!(face_count < pairs);
        prop_assert_eq!(
            generate_deck(pairs * 2, face_count, &mut GameRng::new(seed)),
            Err(ConfigError::InsufficientFaces { pairs, face_count })
        );
    }
}

// =============================================================================
// Distribution Tests
// =============================================================================

/// Test that a 2x2 deal is uniform over its six arrangements.
#[test]
fn test_arrangements_uniform() {
    let trials = 6000;
    let mut seen: FxHashMap<Vec<FaceId>, usize> = FxHashMap::default();

    for seed in 0..trials {
        let deck = generate_deck(4, 2, &mut GameRng::new(seed)).unwrap();
        *seen.entry(deck).or_insert(0) += 1;
    }

    // {0,0,1,1} has 4!/(2!2!) = 6 orderings, expected 1000 each
    assert_eq!(seen.len(), 6);
    for (deck, count) in &seen {
        assert!(
            (850..=1150).contains(count),
            "arrangement {:?} dealt {} times",
            deck,
            count
        );
    }
}

/// Test that each face of the set is equally likely to be chosen.
#[test]
fn test_face_choice_uniform() {
    let trials = 4000;
    let mut chosen = [0usize; 4];

    for seed in 0..trials {
        let deck = generate_deck(2, 4, &mut GameRng::new(seed)).unwrap();
        assert_eq!(deck[0], deck[1]);
        chosen[deck[0].index()] += 1;
    }

    for (face, &count) in chosen.iter().enumerate() {
        assert!((850..=1150).contains(&count), "face {} chosen {} times", face, count);
    }
}

// =============================================================================
// Fixed Boards
// =============================================================================

/// Test the classic 5x6 board deals from exactly 15 faces.
#[test]
fn test_classic_board() {
    let deck = generate_deck(30, 15, &mut GameRng::new(2024)).unwrap();
    let counts = face_counts(&deck);

    assert_eq!(counts.len(), 15);
    assert!((0..15).all(|f| counts.get(&FaceId::new(f)) == Some(&2)));
}

/// Test that an empty grid is rejected.
#[test]
fn test_empty_grid() {
    assert_eq!(generate_deck(0, 10, &mut GameRng::new(1)), Err(ConfigError::EmptyGrid));
}
