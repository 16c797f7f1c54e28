//! Move processing.
//!
//! [`MoveProcessor`] ties the other modules together: it applies a move to
//! a board, recomputes the path network, validates connection degrees,
//! evaluates the quest and returns a fresh [`GameState`](crate::core::GameState).

pub mod engine;

pub use engine::{MoveOutcome, MoveProcessor, MoveResult};
