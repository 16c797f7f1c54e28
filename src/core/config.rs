//! Board topology configuration.
//!
//! The rules engine never hardcodes where tile sides meet. It is handed a
//! [`Topology`] that provides:
//! - the slot → `[N, E, S, W]` connection point table,
//! - the binding between the 12 entities and their anchor points.
//!
//! [`Topology::standard`] is the 3×3 layout the game ships with. Callers pass
//! the topology explicitly to the calculator, validator, evaluator and move
//! processor; there is no global instance.
//!
//! ## Standard numbering
//!
//! ```text
//!        0     1     2
//!    12 [s0] 13 [s1] 14 [s2] 15
//!        3     4     5
//!    16 [s3] 17 [s4] 18 [s5] 19
//!        6     7     8
//!    20 [s6] 21 [s7] 22 [s8] 23
//!        9    10    11
//! ```
//!
//! Boundary points are entity points. Entities are numbered clockwise from
//! the top-left: `0..3` along the top, `3..6` down the right edge, `6..9`
//! right-to-left along the bottom and `9..12` up the left edge.

use serde::{Deserialize, Serialize};

use super::ids::{check_slot, EntityId, PointId, ENTITY_COUNT, POINT_COUNT, SIDE_COUNT, SLOT_COUNT};
use crate::error::{Result, RulesError};

const STANDARD_SLOT_POINTS: [[u8; SIDE_COUNT]; SLOT_COUNT] = [
    [0, 13, 3, 12],
    [1, 14, 4, 13],
    [2, 15, 5, 14],
    [3, 17, 6, 16],
    [4, 18, 7, 17],
    [5, 19, 8, 18],
    [6, 21, 9, 20],
    [7, 22, 10, 21],
    [8, 23, 11, 22],
];

const STANDARD_ENTITY_POINTS: [u8; ENTITY_COUNT] = [0, 1, 2, 15, 19, 23, 11, 10, 9, 20, 16, 12];

/// Raw tables a [`Topology`] is built from and serialized as.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyTables {
    /// `[N, E, S, W]` point indices for each slot.
    pub slot_points: [[u8; SIDE_COUNT]; SLOT_COUNT],
    /// Point index for each entity.
    pub entity_points: [u8; ENTITY_COUNT],
}

/// Fixed board geometry: which points each slot touches and which points
/// are entity anchors.
///
/// ```
/// use tile_link::core::{PointId, Topology};
///
/// let topology = Topology::standard();
/// let points = topology.slot_points(0).unwrap();
/// let raw: Vec<usize> = points.iter().map(|p| p.index()).collect();
/// assert_eq!(raw, vec![0, 13, 3, 12]);
///
/// assert!(topology.is_entity_point(PointId::new(0).unwrap()));
/// assert!(!topology.is_entity_point(PointId::new(13).unwrap()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TopologyTables", into = "TopologyTables")]
pub struct Topology {
    slot_points: [[PointId; SIDE_COUNT]; SLOT_COUNT],
    entity_points: [PointId; ENTITY_COUNT],
    point_entities: [Option<EntityId>; POINT_COUNT],
}

impl Topology {
    /// The shipped 3×3 layout.
    #[must_use]
    pub fn standard() -> Self {
        let slot_points = STANDARD_SLOT_POINTS.map(|sides| sides.map(PointId::from_raw));
        let entity_points = STANDARD_ENTITY_POINTS.map(PointId::from_raw);
        Self::assemble(slot_points, entity_points)
    }

    /// Build a topology from raw tables.
    ///
    /// Fails if any point index is out of range or if two entities share
    /// a point.
    pub fn from_tables(
        slot_points: [[u8; SIDE_COUNT]; SLOT_COUNT],
        entity_points: [u8; ENTITY_COUNT],
    ) -> Result<Self> {
        let mut checked_slots = [[PointId::from_raw(0); SIDE_COUNT]; SLOT_COUNT];
        for (slot, sides) in slot_points.iter().enumerate() {
            for (side, &point) in sides.iter().enumerate() {
                checked_slots[slot][side] = PointId::new(point as usize)?;
            }
        }

        let mut checked_entities = [PointId::from_raw(0); ENTITY_COUNT];
        let mut seen = [false; POINT_COUNT];
        for (entity, &point) in entity_points.iter().enumerate() {
            let point = PointId::new(point as usize)?;
            if seen[point.index()] {
                return Err(RulesError::DuplicateEntityPoint { point: point.index() });
            }
            seen[point.index()] = true;
            checked_entities[entity] = point;
        }

        Ok(Self::assemble(checked_slots, checked_entities))
    }

    fn assemble(
        slot_points: [[PointId; SIDE_COUNT]; SLOT_COUNT],
        entity_points: [PointId; ENTITY_COUNT],
    ) -> Self {
        let mut point_entities = [None; POINT_COUNT];
        for (entity, point) in EntityId::all().zip(entity_points.iter()) {
            point_entities[point.index()] = Some(entity);
        }

        Self {
            slot_points,
            entity_points,
            point_entities,
        }
    }

    /// The `[N, E, S, W]` points of a slot.
    pub fn slot_points(&self, slot: usize) -> Result<[PointId; SIDE_COUNT]> {
        Ok(self.slot_points[check_slot(slot)?])
    }

    /// Points of a slot already known to be in range.
    pub(crate) fn points_of(&self, slot: usize) -> &[PointId; SIDE_COUNT] {
        &self.slot_points[slot]
    }

    /// The entity anchored at `point`, if any.
    #[must_use]
    pub fn entity_at(&self, point: PointId) -> Option<EntityId> {
        self.point_entities[point.index()]
    }

    /// Whether `point` anchors an entity.
    #[must_use]
    pub fn is_entity_point(&self, point: PointId) -> bool {
        self.entity_at(point).is_some()
    }

    /// The point an entity is anchored to.
    #[must_use]
    pub fn entity_point(&self, entity: EntityId) -> PointId {
        self.entity_points[entity.index()]
    }

    /// All entity points, in entity order.
    #[must_use]
    pub fn entity_points(&self) -> &[PointId; ENTITY_COUNT] {
        &self.entity_points
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<TopologyTables> for Topology {
    type Error = RulesError;

    fn try_from(tables: TopologyTables) -> Result<Self> {
        Self::from_tables(tables.slot_points, tables.entity_points)
    }
}

impl From<Topology> for TopologyTables {
    fn from(topology: Topology) -> Self {
        Self {
            slot_points: topology.slot_points.map(|sides| sides.map(u8::from)),
            entity_points: topology.entity_points.map(u8::from),
        }
    }
}
