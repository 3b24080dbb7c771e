//! Deck generation.
//!
//! Deals the faces for a new grid: pick distinct faces, double each one
//! into a pair, then shuffle the whole sequence.

use crate::core::{ConfigError, GameRng};

use super::face::FaceId;

/// Generate a shuffled, paired face sequence of length `total_slots`.
///
/// `face_count` is the size of the host's face set; faces are drawn from
/// `0..face_count` without replacement, so no face appears in more than
/// one pair.
///
/// ```
/// use memory_match::cards::generate_deck;
/// use memory_match::core::GameRng;
///
/// let mut rng = GameRng::new(1);
/// let deck = generate_deck(4, 2, &mut rng).unwrap();
/// assert_eq!(deck.len(), 4);
///
/// let mut sorted = deck.clone();
/// sorted.sort();
/// assert_eq!(sorted[0], sorted[1]);
/// assert_eq!(sorted[2], sorted[3]);
/// ```
pub fn generate_deck(
    total_slots: usize,
    face_count: usize,
    rng: &mut GameRng,
) -> Result<Vec<FaceId>, ConfigError> {
    if total_slots == 0 {
        return Err(ConfigError::EmptyGrid);
    }
    if total_slots % 2 != 0 {
        return Err(ConfigError::OddGridSize { total_slots });
    }

    let pairs = total_slots / 2;
    if pairs > face_count {
        return Err(ConfigError::InsufficientFaces { pairs, face_count });
    }

    let mut faces = Vec::with_capacity(total_slots);
    for chosen in rng.sample_distinct(face_count, pairs) {
        let face = FaceId::new(chosen as u32);
        faces.push(face);
        faces.push(face);
    }

    rng.shuffle(&mut faces);

    Ok(faces)
}
