//! Grid state: the slots of the current game.
//!
//! `GridState` owns every `CardSlot` of a game. Its only mutator is
//! [`GridState::set_matched`]; the turn resolver is the only caller.

use serde::{Deserialize, Serialize};

use super::dims::{GridDims, Position};
use crate::cards::{CardSlot, FaceId};
use crate::core::ConfigError;

/// All slots of one game, in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    dims: GridDims,
    slots: Vec<CardSlot>,
}

impl GridState {
    /// Build a fresh grid from a dealt face sequence.
    ///
    /// ```
    /// use memory_match::cards::FaceId;
    /// use memory_match::grid::{GridDims, GridState};
    ///
    /// let faces = [0, 1, 1, 0].map(FaceId::new).to_vec();
    /// let grid = GridState::new(GridDims::new(2, 2), faces).unwrap();
    /// assert_eq!(grid.len(), 4);
    /// assert!(!grid.all_matched());
    /// ```
    pub fn new(dims: GridDims, faces: Vec<FaceId>) -> Result<Self, ConfigError> {
        let slots = faces.into_iter().map(CardSlot::new).collect();
        Self::from_slots(dims, slots)
    }

    /// Build a grid from slots that may already be matched.
    pub fn from_slots(dims: GridDims, slots: Vec<CardSlot>) -> Result<Self, ConfigError> {
        if slots.len() != dims.total() {
            return Err(ConfigError::SlotCountMismatch {
                expected: dims.total(),
                actual: slots.len(),
            });
        }
        Ok(Self { dims, slots })
    }

    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&CardSlot> {
        self.slots.get(index)
    }

    #[must_use]
    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    /// Layout position of a slot.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Position> {
        self.dims.position(index)
    }

    /// Mark a slot as matched.
    ///
    /// Returns false if the index is out of range.
    pub fn set_matched(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.matched = true;
                true
            }
            None => false,
        }
    }

    /// True iff every slot is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.slots.iter().all(|s| s.matched)
    }

    /// Number of matched slots.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.slots.iter().filter(|s| s.matched).count()
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.matched_count() / 2
    }

    /// The other slot holding the same face.
    #[must_use]
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        let face = self.slots.get(index)?.face;
        self.slots
            .iter()
            .enumerate()
            .find(|&(i, s)| i != index && s.face == face)
            .map(|(i, _)| i)
    }

    /// Iterate over `(index, slot)` for slots still in play.
    pub fn unmatched(&self) -> impl Iterator<Item = (usize, &CardSlot)> {
        self.slots.iter().enumerate().filter(|(_, s)| !s.matched)
    }
}
