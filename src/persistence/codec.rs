//! Converting live game state to and from `SaveRecord`.

use rustc_hash::FxHashMap;

use super::record::SaveRecord;
use crate::cards::{CardSlot, FaceId};
use crate::core::{CodecError, CorruptSaveData};
use crate::grid::{GridDims, GridState};
use crate::turns::ScoreState;

/// State recovered from a save record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestoredGame {
    pub grid: GridState,
    pub score: ScoreState,
    pub seed: Option<u64>,
}

/// Snapshot a game.
#[must_use]
pub fn encode(grid: &GridState, score: &ScoreState, seed: Option<u64>) -> SaveRecord {
    let dims = grid.dims();
    SaveRecord {
        rows: dims.rows,
        cols: dims.cols,
        faces: grid.slots().iter().map(|s| s.face.raw()).collect(),
        matched: grid.slots().iter().map(|s| s.matched).collect(),
        score: score.score,
        streak: score.streak,
        seed,
    }
}

/// Rebuild a game from a record, validating it against the host's face set.
///
/// ```
/// use memory_match::persistence::{decode, SaveRecord};
///
/// let record = SaveRecord {
///     rows: 1,
///     cols: 4,
///     faces: vec![0, 1, 1, 0],
///     matched: vec![false, true, true, false],
///     score: 10,
///     streak: 1,
///     seed: None,
/// };
/// let restored = decode(&record, 2).unwrap();
/// assert_eq!(restored.score.pairs_found, 1);
///
/// // Face 1 is out of range when the host only has one face loaded
/// assert!(decode(&record, 1).is_err());
/// ```
pub fn decode(record: &SaveRecord, face_count: usize) -> Result<RestoredGame, CorruptSaveData> {
    let dims = GridDims::new(record.rows, record.cols);
    if !dims.holds_pairs() {
        return Err(CorruptSaveData::DimensionsInvalid {
            rows: record.rows,
            cols: record.cols,
        });
    }

    check_len("faces", dims.total(), record.faces.len())?;
    check_len("matched", dims.total(), record.matched.len())?;

    // face -> (slots seen, slots matched)
    let mut pairs: FxHashMap<u32, (usize, usize)> = FxHashMap::default();
    for (slot, (&face, &matched)) in record.faces.iter().zip(&record.matched).enumerate() {
        if face as usize >= face_count {
            return Err(CorruptSaveData::FaceOutOfRange { slot, face, face_count });
        }
        let entry = pairs.entry(face).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += usize::from(matched);
    }

    let mut faces: Vec<_> = pairs.into_iter().collect();
    faces.sort_unstable_by_key(|&(face, _)| face);
    for (face, (count, matched)) in faces {
        if count != 2 {
            return Err(CorruptSaveData::UnpairedFace { face, count });
        }
        if matched == 1 {
            return Err(CorruptSaveData::PairFlagsDisagree { face });
        }
    }

    let slots: Vec<CardSlot> = record
        .faces
        .iter()
        .zip(&record.matched)
        .map(|(&face, &matched)| CardSlot::with_matched(FaceId::new(face), matched))
        .collect();
    let grid = GridState::from_slots(dims, slots).map_err(|_| CorruptSaveData::LengthMismatch {
        field: "faces",
        expected: dims.total(),
        actual: record.faces.len(),
    })?;

    let score = ScoreState {
        score: record.score,
        streak: record.streak,
        pairs_found: grid.pairs_found() as u32,
    };

    Ok(RestoredGame {
        grid,
        score,
        seed: record.seed,
    })
}

/// Parse and validate a JSON save in one step.
pub fn decode_json(json: &str, face_count: usize) -> Result<RestoredGame, CodecError> {
    let record = SaveRecord::from_json(json)?;
    Ok(decode(&record, face_count)?)
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), CorruptSaveData> {
    if expected == actual {
        Ok(())
    } else {
        Err(CorruptSaveData::LengthMismatch { field, expected, actual })
    }
}
