//! Checks a [`PathNetwork`] against a [`Quest`].
//!
//! Evaluation order:
//! 1. Groups in order. Clump groups always pass; an empty group fails; a
//!    single-entity group passes; otherwise every member's point must share
//!    the first member's class. The first failing group ends evaluation
//!    with [`QuestResult::Incomplete`].
//! 2. Disconnect requirements in order. Each group is represented by its
//!    first entity's point; a group with no representative is never
//!    connected. The first pair found connected ends evaluation with
//!    [`QuestResult::Failed`].
//! 3. Otherwise [`QuestResult::Success`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::quest::{EntityGroup, Quest};
use crate::core::{PointId, Topology};
use crate::error::Result;
use crate::paths::PathNetwork;

/// Tri-state quest outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestResult {
    /// Not there yet; play continues.
    Incomplete { reason: String },
    /// A disconnect requirement is violated.
    Failed { reason: String },
    /// Every objective holds.
    Success,
}

impl QuestResult {
    /// Whether the outcome is terminal (success or failure).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !matches!(self, QuestResult::Incomplete { .. })
    }

    /// Whether the quest succeeded.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        matches!(self, QuestResult::Success)
    }

    /// Whether the quest failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, QuestResult::Failed { .. })
    }

    /// Why the quest is not successful, if it isn't.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            QuestResult::Incomplete { reason } | QuestResult::Failed { reason } => Some(reason),
            QuestResult::Success => None,
        }
    }
}

impl std::fmt::Display for QuestResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestResult::Incomplete { reason } => write!(f, "incomplete: {reason}"),
            QuestResult::Failed { reason } => write!(f, "failed: {reason}"),
            QuestResult::Success => write!(f, "success"),
        }
    }
}

/// Evaluates quests against path networks.
#[derive(Clone, Debug, Default)]
pub struct QuestEvaluator {
    topology: Topology,
}

impl QuestEvaluator {
    /// Create an evaluator over `topology`.
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self { topology }
    }

    /// Whether every member of `group` shares the first member's class,
    /// ignoring the clump flag. Empty groups are never connected.
    fn group_connected(&self, group: &EntityGroup, network: &PathNetwork) -> bool {
        let Some((first, rest)) = group.entities().split_first() else {
            return false;
        };
        let anchor = self.topology.entity_point(*first);
        rest.iter()
            .all(|entity| network.are_connected(anchor, self.topology.entity_point(*entity)))
    }

    fn representative(&self, quest: &Quest, group: usize) -> Option<PointId> {
        quest
            .groups()
            .get(group)
            .and_then(EntityGroup::first)
            .map(|entity| self.topology.entity_point(entity))
    }

    fn pair_connected(
        &self,
        quest: &Quest,
        group_a: usize,
        group_b: usize,
        network: &PathNetwork,
    ) -> bool {
        match (
            self.representative(quest, group_a),
            self.representative(quest, group_b),
        ) {
            (Some(a), Some(b)) => network.are_connected(a, b),
            _ => false,
        }
    }

    /// Evaluate `quest` against `network`, short-circuiting on the first
    /// unmet group or violated disconnect.
    #[must_use]
    pub fn evaluate(&self, quest: &Quest, network: &PathNetwork) -> QuestResult {
        let result = self.evaluate_inner(quest, network);
        trace!(%result, "evaluated quest");
        result
    }

    fn evaluate_inner(&self, quest: &Quest, network: &PathNetwork) -> QuestResult {
        for (index, group) in quest.groups().iter().enumerate() {
            if group.is_clump_only() {
                continue;
            }
            if group.is_empty() {
                return QuestResult::Incomplete {
                    reason: format!("group {index} has no entities"),
                };
            }
            if !self.group_connected(group, network) {
                return QuestResult::Incomplete {
                    reason: format!("group {index} is not connected"),
                };
            }
        }

        for req in quest.disconnects() {
            if self.pair_connected(quest, req.group_a, req.group_b, network) {
                return QuestResult::Failed {
                    reason: format!(
                        "groups {} and {} must not be connected",
                        req.group_a, req.group_b
                    ),
                };
            }
        }

        QuestResult::Success
    }

    /// Fraction of objectives currently met, in `0.0..=1.0`.
    ///
    /// A group counts as met only if it is not clump-only and is connected.
    /// Clump groups still count toward the total, so a quest with clumps
    /// never reaches 1.0 here. A quest with no objectives reports 1.0.
    #[must_use]
    pub fn completion_progress(&self, quest: &Quest, network: &PathNetwork) -> f32 {
        let total = quest.group_count() + quest.disconnects().len();
        if total == 0 {
            return 1.0;
        }

        let groups = quest
            .groups()
            .iter()
            .filter(|group| !group.is_clump_only() && self.group_connected(group, network))
            .count();
        let disconnects = quest
            .disconnects()
            .iter()
            .filter(|req| !self.pair_connected(quest, req.group_a, req.group_b, network))
            .count();

        (groups + disconnects) as f32 / total as f32
    }

    /// Whether group `index` passes on its own, with clump groups passing.
    pub fn group_satisfied(
        &self,
        quest: &Quest,
        index: usize,
        network: &PathNetwork,
    ) -> Result<bool> {
        let group = quest.group(index)?;
        Ok(group.is_clump_only() || self.group_connected(group, network))
    }
}
