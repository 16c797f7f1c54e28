//! Move representation.
//!
//! A move is one atomic board edit:
//! - `Rotate`: set the rotation of the tile in one slot
//! - `Swap`: exchange the contents of two slots
//!
//! Moves are plain data. They are checked against a board only when the
//! [`MoveProcessor`](crate::rules::MoveProcessor) applies them.

use serde::{Deserialize, Serialize};

/// A board edit requested by a player or a solver.
///
/// ```
/// use tile_link::core::Move;
///
/// let rotate = Move::rotate(4, 2);
/// let swap = Move::swap(0, 8);
///
/// assert_eq!(rotate.to_string(), "rotate slot 4 to 2");
/// assert_eq!(swap.slots(), (0, Some(8)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Turn the tile in `slot` to `rotation`.
    Rotate { slot: usize, rotation: u8 },
    /// Exchange `slot_a` and `slot_b`.
    Swap { slot_a: usize, slot_b: usize },
}

impl Move {
    /// Create a rotate move.
    #[must_use]
    pub const fn rotate(slot: usize, rotation: u8) -> Self {
        Move::Rotate { slot, rotation }
    }

    /// Create a swap move.
    #[must_use]
    pub const fn swap(slot_a: usize, slot_b: usize) -> Self {
        Move::Swap { slot_a, slot_b }
    }

    /// Slots touched by this move: the rotated slot, or both swapped slots.
    #[must_use]
    pub const fn slots(self) -> (usize, Option<usize>) {
        match self {
            Move::Rotate { slot, .. } => (slot, None),
            Move::Swap { slot_a, slot_b } => (slot_a, Some(slot_b)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Rotate { slot, rotation } => write!(f, "rotate slot {slot} to {rotation}"),
            Move::Swap { slot_a, slot_b } => write!(f, "swap slots {slot_a} and {slot_b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Move::rotate(3, 1), Move::Rotate { slot: 3, rotation: 1 });
        assert_eq!(Move::swap(2, 6), Move::Swap { slot_a: 2, slot_b: 6 });
    }

    #[test]
    fn test_slots() {
        assert_eq!(Move::rotate(7, 0).slots(), (7, None));
        assert_eq!(Move::swap(1, 5).slots(), (1, Some(5)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::swap(1, 5).to_string(), "swap slots 1 and 5");
    }

    #[test]
    fn test_move_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |m: &Move| {
            let mut h = DefaultHasher::new();
            m.hash(&mut h);
            h.finish()
        };

        assert_eq!(hash(&Move::rotate(1, 2)), hash(&Move::rotate(1, 2)));
        assert_ne!(hash(&Move::rotate(1, 2)), hash(&Move::rotate(2, 1)));
    }

    #[test]
    fn test_move_serialization() {
        let moves = vec![Move::rotate(4, 3), Move::swap(0, 8)];
        let json = serde_json::to_string(&moves).unwrap();
        let back: Vec<Move> = serde_json::from_str(&json).unwrap();
        assert_eq!(moves, back);
    }
}
