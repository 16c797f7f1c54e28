//! Identifiers for the fixed board geometry.
//!
//! ## Layout
//!
//! - 9 slots, indexed `0..9` row-major.
//! - 24 connection points where tile sides terminate.
//! - 12 entities, each bound to exactly one connection point by the
//!   [`Topology`](super::Topology).
//!
//! `PointId` and `EntityId` are range-checked when created, including when
//! deserialized, so every value in circulation is a valid index.
//!
//! ```
//! use tile_link::core::{EntityId, PointId};
//!
//! let point = PointId::new(13).unwrap();
//! assert_eq!(point.index(), 13);
//! assert!(PointId::new(24).is_err());
//!
//! assert!(EntityId::new(11).is_ok());
//! assert!(EntityId::new(12).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// Number of slots on the board.
pub const SLOT_COUNT: usize = 9;

/// Number of connection points on the board.
pub const POINT_COUNT: usize = 24;

/// Number of entities (and of entity points).
pub const ENTITY_COUNT: usize = 12;

/// Number of sides on a tile.
pub const SIDE_COUNT: usize = 4;

/// One of the 24 connection points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PointId(u8);

impl PointId {
    /// Create a point ID, failing if `index >= POINT_COUNT`.
    pub fn new(index: usize) -> Result<Self> {
        if index < POINT_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(RulesError::PointOutOfRange { point: index })
        }
    }

    /// Build from a compile-time constant already known to be in range.
    pub(crate) const fn from_raw(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every point in index order.
    pub fn all() -> impl Iterator<Item = PointId> {
        (0..POINT_COUNT as u8).map(PointId)
    }
}

impl TryFrom<u8> for PointId {
    type Error = RulesError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value as usize)
    }
}

impl From<PointId> for u8 {
    fn from(value: PointId) -> Self {
        value.0
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({})", self.0)
    }
}

/// One of the 12 entity anchors a quest routes between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EntityId(u8);

impl EntityId {
    /// Create an entity ID, failing if `index >= ENTITY_COUNT`.
    pub fn new(index: usize) -> Result<Self> {
        if index < ENTITY_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(RulesError::EntityOutOfRange { entity: index })
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every entity in index order.
    pub fn all() -> impl Iterator<Item = EntityId> {
        (0..ENTITY_COUNT as u8).map(EntityId)
    }
}

impl TryFrom<u8> for EntityId {
    type Error = RulesError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value as usize)
    }
}

impl From<EntityId> for u8 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Check a slot index, returning it unchanged when valid.
pub(crate) fn check_slot(slot: usize) -> Result<usize> {
    if slot < SLOT_COUNT {
        Ok(slot)
    } else {
        Err(RulesError::SlotOutOfRange { slot })
    }
}
