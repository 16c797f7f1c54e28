//! Quests: the puzzle's win condition and its evaluation.
//!
//! - `quest`: [`Quest`], its groups and disconnect requirements
//! - `evaluator`: [`QuestEvaluator`] and the tri-state [`QuestResult`]

pub mod evaluator;
pub mod quest;

pub use evaluator::{QuestEvaluator, QuestResult};
pub use quest::{DisconnectRequirement, EntityGroup, Quest, QuestBuilder};
