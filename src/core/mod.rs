//! Core engine types: identifiers, topology, union-find, moves and state.
//!
//! Everything here is independent of tile wiring and quest rules. The
//! board geometry comes from a [`Topology`] passed in by the caller.

pub mod action;
pub mod config;
pub mod disjoint_set;
pub mod ids;
pub mod state;

pub use action::Move;
pub use config::{Topology, TopologyTables};
pub use disjoint_set::DisjointSet;
pub use ids::{EntityId, PointId, ENTITY_COUNT, POINT_COUNT, SIDE_COUNT, SLOT_COUNT};
pub use state::GameState;
