//! Precondition violations raised by board, quest and configuration calls.
//!
//! Degree-rule violations and quest status are *not* errors: they are
//! reported as data by [`crate::validation`] and [`crate::quests`].

use thiserror::Error;

/// A call was made with arguments that violate its preconditions.
///
/// Every variant names the offending index so callers can surface it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Slot index outside `0..9`.
    #[error("slot {slot} is out of range (board has 9 slots)")]
    SlotOutOfRange { slot: usize },

    /// Connection point index outside `0..24`.
    #[error("connection point {point} is out of range (board has 24 points)")]
    PointOutOfRange { point: usize },

    /// Entity index outside `0..12`.
    #[error("entity {entity} is out of range (board has 12 entities)")]
    EntityOutOfRange { entity: usize },

    /// The slot holds no tile.
    #[error("slot {slot} is empty")]
    EmptySlot { slot: usize },

    /// Rotation not in `0..max` for a tile type.
    #[error("rotation {rotation} is out of range (max {max})")]
    InvalidRotation { rotation: u8, max: u8 },

    /// Rotation not in `0..max` for the tile in a slot.
    #[error("rotation {rotation} is out of range for slot {slot} (max {max})")]
    RotationOutOfRange { slot: usize, rotation: u8, max: u8 },

    /// An entity group was built with no entities.
    #[error("entity group {group} has no entities")]
    EmptyEntityGroup { group: usize },

    /// A disconnect requirement refers to a group that does not exist.
    #[error("group {group} does not exist (quest has {groups} groups)")]
    GroupOutOfRange { group: usize, groups: usize },

    /// Two entities were bound to the same connection point.
    #[error("connection point {point} is bound to more than one entity")]
    DuplicateEntityPoint { point: usize },
}

/// Result alias for fallible rules operations.
pub type Result<T> = std::result::Result<T, RulesError>;
