//! Tile catalog and the immutable board.
//!
//! - `tile`: tile types, rotation limits, side wiring
//! - `board`: the 9-slot board and its non-destructive edits

pub mod board;
pub mod tile;

pub use board::{Board, Slot};
pub use tile::{ConnectionGroup, Connections, Side, Tile, TileType};
