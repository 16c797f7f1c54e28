//! The immutable 9-slot board.
//!
//! Every edit (`with_tile`, `without_tile`, `with_rotation`, `with_swap`)
//! validates its arguments and returns a new [`Board`]. The receiver is
//! never modified, so a board can be shared freely between game states.

use serde::{Deserialize, Serialize};

use super::tile::Tile;
use crate::core::ids::{check_slot, SLOT_COUNT};
use crate::error::{Result, RulesError};

/// Contents of one board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Tile),
}

impl Slot {
    /// The tile held here, if any.
    #[must_use]
    pub const fn tile(self) -> Option<Tile> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(tile) => Some(tile),
        }
    }

    /// Whether the slot holds a tile.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Slot::Occupied(_))
    }
}

/// Ordered array of 9 slots, row-major from the top-left.
///
/// ```
/// use tile_link::tiles::{Board, Tile, TileType};
///
/// let board = Board::empty();
/// let placed = board.with_tile(4, Tile::unrotated(TileType::Curve)).unwrap();
/// let turned = placed.with_rotation(4, 2).unwrap();
///
/// assert!(board.tile(4).unwrap().is_none());
/// assert_eq!(placed.tile(4).unwrap().unwrap().rotation(), 0);
/// assert_eq!(turned.tile(4).unwrap().unwrap().rotation(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    slots: [Slot; SLOT_COUNT],
}

impl Board {
    /// A board with no tiles.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A board with the given slot contents.
    #[must_use]
    pub const fn from_slots(slots: [Slot; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// All slots in order.
    #[must_use]
    pub const fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    /// Contents of one slot.
    pub fn slot(&self, slot: usize) -> Result<Slot> {
        Ok(self.slots[check_slot(slot)?])
    }

    /// The tile in a slot, if any.
    pub fn tile(&self, slot: usize) -> Result<Option<Tile>> {
        Ok(self.slot(slot)?.tile())
    }

    /// Occupied slots with their tiles, in slot order.
    pub fn occupied_slots(&self) -> impl Iterator<Item = (usize, Tile)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, contents)| contents.tile().map(|tile| (slot, tile)))
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    /// Whether no tile is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tile_count() == 0
    }

    /// Place `tile` in `slot`, replacing whatever was there.
    pub fn with_tile(&self, slot: usize, tile: Tile) -> Result<Self> {
        let slot = check_slot(slot)?;
        let mut next = *self;
        next.slots[slot] = Slot::Occupied(tile);
        Ok(next)
    }

    /// Clear `slot`.
    pub fn without_tile(&self, slot: usize) -> Result<Self> {
        let slot = check_slot(slot)?;
        let mut next = *self;
        next.slots[slot] = Slot::Empty;
        Ok(next)
    }

    /// Set the rotation of the tile in `slot`.
    ///
    /// Fails if the slot is empty or `rotation` is not below the tile's
    /// rotation limit.
    pub fn with_rotation(&self, slot: usize, rotation: u8) -> Result<Self> {
        let tile = self.tile(slot)?.ok_or(RulesError::EmptySlot { slot })?;
        let rotated = tile
            .with_rotation(rotation)
            .map_err(|_| RulesError::RotationOutOfRange {
                slot,
                rotation,
                max: tile.max_rotations(),
            })?;

        let mut next = *self;
        next.slots[slot] = Slot::Occupied(rotated);
        Ok(next)
    }

    /// Exchange the contents of two slots.
    ///
    /// Empty slots may take part, and swapping a slot with itself is a
    /// no-op.
    pub fn with_swap(&self, a: usize, b: usize) -> Result<Self> {
        let a = check_slot(a)?;
        let b = check_slot(b)?;
        let mut next = *self;
        next.slots.swap(a, b);
        Ok(next)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.slots.chunks(3) {
            let cells: Vec<String> = row
                .iter()
                .map(|slot| match slot {
                    Slot::Empty => "..".to_string(),
                    Slot::Occupied(tile) => tile.to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
