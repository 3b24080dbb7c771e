//! Grid model.
//!
//! ## Key Types
//!
//! - `GridDims`: Rows/columns and the index ↔ position mapping
//! - `Position`: Layout coordinates of a slot
//! - `GridState`: The slots of the current game

pub mod dims;
pub mod state;

pub use dims::{GridDims, Position};
pub use state::GridState;
