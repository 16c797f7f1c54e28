//! # tile-link
//!
//! Rules engine for a 3×3 tile-connection puzzle.
//!
//! Tiles sit in the nine slots of a board. Each tile wires some of its four
//! sides together; sides of neighbouring slots meet at shared connection
//! points, and twelve of the outer points carry entities. A quest asks for
//! certain entities to be joined by paths and for certain groups to stay
//! apart. Players rotate and swap tiles until the board is legal and the
//! quest holds.
//!
//! ## Design Principles
//!
//! 1. **Immutable states**: boards and game states are values. Every move
//!    produces a new state; the previous one stays valid.
//!
//! 2. **Violations are data**: degree problems and quest status are
//!    reported as results. Only broken preconditions (bad slot, empty
//!    slot, bad rotation) are errors.
//!
//! 3. **Topology as configuration**: slot and entity point tables live in
//!    a [`Topology`] value rather than being scattered through the code.
//!
//! ## Modules
//!
//! - `core`: identifiers, topology, union-find, moves and game state
//! - `error`: [`RulesError`] and the crate `Result`
//! - `tiles`: tile catalog and the board
//! - `paths`: path network and its calculator
//! - `validation`: per-point degree rules
//! - `quests`: quests and their evaluation
//! - `rules`: the move processor
//!
//! ## Example
//!
//! ```
//! use tile_link::{Board, EntityId, Move, MoveProcessor, Quest, Tile, TileType};
//!
//! let processor = MoveProcessor::default();
//! let e = |i| EntityId::new(i).unwrap();
//! let quest = Quest::builder().group([e(0), e(11)]).build().unwrap();
//! let board = Board::empty().with_tile(0, Tile::unrotated(TileType::Curve)).unwrap();
//!
//! let state = processor.initial_state(board, quest);
//! let result = processor.process_move(&state, Move::rotate(0, 2));
//! assert!(result.is_winning_move());
//! ```

pub mod core;
pub mod error;
pub mod paths;
pub mod quests;
pub mod rules;
pub mod tiles;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    DisjointSet, EntityId, GameState, Move, PointId, Topology, TopologyTables,
    ENTITY_COUNT, POINT_COUNT, SIDE_COUNT, SLOT_COUNT,
};

pub use crate::error::{Result, RulesError};

pub use crate::tiles::{Board, Side, Slot, Tile, TileType};

pub use crate::paths::{PathCalculator, PathNetwork};

pub use crate::validation::{
    ConnectionValidator, DegreeIssue, Severity, ValidationEntry, ValidationResult,
};

pub use crate::quests::{
    DisconnectRequirement, EntityGroup, Quest, QuestBuilder, QuestEvaluator, QuestResult,
};

pub use crate::rules::{MoveOutcome, MoveProcessor, MoveResult};
