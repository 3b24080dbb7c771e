//! Grid dimensions and slot positions.

use serde::{Deserialize, Serialize};

/// Row/column of a slot, used for layout only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Shape of a grid.
///
/// Slots are laid out row-major: index `i` sits at
/// `(i / cols, i % cols)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    pub rows: u32,
    pub cols: u32,
}

impl GridDims {
    #[must_use]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Number of slots.
    #[must_use]
    pub const fn total(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Number of pairs a full grid holds.
    #[must_use]
    pub const fn pairs(self) -> usize {
        self.total() / 2
    }

    /// Non-empty and even, so it can be filled with pairs.
    #[must_use]
    pub const fn holds_pairs(self) -> bool {
        let total = self.total();
        total > 0 && total % 2 == 0
    }

    /// Position of a slot index. `None` past the end of the grid.
    #[must_use]
    pub fn position(self, index: usize) -> Option<Position> {
        if index >= self.total() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Position::new((index / cols) as u32, (index % cols) as u32))
    }

    /// Slot index of a position. `None` outside the grid.
    #[must_use]
    pub fn index_of(self, position: Position) -> Option<usize> {
        if position.row >= self.rows || position.col >= self.cols {
            return None;
        }
        Some(position.row as usize * self.cols as usize + position.col as usize)
    }
}

impl std::fmt::Display for GridDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
