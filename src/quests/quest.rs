//! Quest definition: entity groups and disconnect requirements.
//!
//! A quest is the win condition of a puzzle:
//! - each [`EntityGroup`] lists entities that must end up on one path,
//!   unless it is a *clump* group, which only marks entities as belonging
//!   together and is always satisfied;
//! - each [`DisconnectRequirement`] names two groups whose paths must stay
//!   apart.
//!
//! Quests are immutable once built. Groups live in `im` vectors so every
//! game state can hold the quest at O(1) clone cost.
//!
//! ```
//! use tile_link::core::EntityId;
//! use tile_link::quests::Quest;
//!
//! let e = |i| EntityId::new(i).unwrap();
//! let quest = Quest::builder()
//!     .group([e(0), e(6)])
//!     .group([e(3), e(9)])
//!     .keep_apart(0, 1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(quest.group_count(), 2);
//! assert_eq!(quest.disconnects().len(), 1);
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::EntityId;
use crate::error::{Result, RulesError};

/// Entities that must share a path (or, for clumps, merely belong together).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityGroup {
    entities: SmallVec<[EntityId; 4]>,
    clump_only: bool,
}

impl EntityGroup {
    /// Group members in order. The first member represents the group.
    #[must_use]
    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    /// Whether this group only marks a clump and places no connectivity
    /// requirement.
    #[must_use]
    pub fn is_clump_only(&self) -> bool {
        self.clump_only
    }

    /// Representative entity, if the group has any.
    #[must_use]
    pub fn first(&self) -> Option<EntityId> {
        self.entities.first().copied()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn unchecked(
        entities: impl IntoIterator<Item = EntityId>,
        clump_only: bool,
    ) -> Self {
        Self {
            entities: entities.into_iter().collect(),
            clump_only,
        }
    }
}

/// Two groups (by index) whose paths must not connect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisconnectRequirement {
    pub group_a: usize,
    pub group_b: usize,
}

/// Entity groups plus disconnect requirements.
///
/// Deserialization runs the same checks as [`QuestBuilder::build`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestFields")]
pub struct Quest {
    groups: Vector<EntityGroup>,
    disconnects: Vector<DisconnectRequirement>,
}

impl Quest {
    /// Start building a quest.
    #[must_use]
    pub fn builder() -> QuestBuilder {
        QuestBuilder::default()
    }

    /// Groups in order.
    #[must_use]
    pub fn groups(&self) -> &Vector<EntityGroup> {
        &self.groups
    }

    /// One group by index.
    pub fn group(&self, index: usize) -> Result<&EntityGroup> {
        self.groups.get(index).ok_or(RulesError::GroupOutOfRange {
            group: index,
            groups: self.groups.len(),
        })
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Disconnect requirements in order.
    #[must_use]
    pub fn disconnects(&self) -> &Vector<DisconnectRequirement> {
        &self.disconnects
    }

    /// Whether the quest asks for nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.disconnects.is_empty()
    }

    /// A quest that skips the build checks, for exercising evaluation of
    /// malformed input.
    #[cfg(test)]
    pub(crate) fn unchecked(
        groups: impl IntoIterator<Item = EntityGroup>,
        disconnects: impl IntoIterator<Item = DisconnectRequirement>,
    ) -> Self {
        Self {
            groups: groups.into_iter().collect(),
            disconnects: disconnects.into_iter().collect(),
        }
    }

    /// Every entity named by any group, ascending and without repeats.
    #[must_use]
    pub fn involved_entities(&self) -> Vec<EntityId> {
        let unique: FxHashSet<EntityId> = self
            .groups
            .iter()
            .flat_map(|group| group.entities().iter().copied())
            .collect();
        let mut entities: Vec<EntityId> = unique.into_iter().collect();
        entities.sort_unstable();
        entities
    }
}

impl std::fmt::Display for Quest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(self.groups.len() + self.disconnects.len());

        for group in &self.groups {
            let members: Vec<String> = group
                .entities()
                .iter()
                .map(|e| e.index().to_string())
                .collect();
            let verb = if group.is_clump_only() { "clump" } else { "connect" };
            parts.push(format!("{verb} [{}]", members.join(", ")));
        }
        for req in &self.disconnects {
            parts.push(format!("keep group {} apart from group {}", req.group_a, req.group_b));
        }

        if parts.is_empty() {
            write!(f, "no objectives")
        } else {
            write!(f, "{}", parts.join("; "))
        }
    }
}

/// Builder for [`Quest`].
///
/// Groups are indexed in the order they are added.
#[derive(Clone, Debug, Default)]
pub struct QuestBuilder {
    groups: Vec<EntityGroup>,
    disconnects: Vec<DisconnectRequirement>,
}

impl QuestBuilder {
    fn push(mut self, entities: impl IntoIterator<Item = EntityId>, clump_only: bool) -> Self {
        self.groups.push(EntityGroup {
            entities: entities.into_iter().collect(),
            clump_only,
        });
        self
    }

    /// Add a group whose entities must all share one path.
    #[must_use]
    pub fn group(self, entities: impl IntoIterator<Item = EntityId>) -> Self {
        self.push(entities, false)
    }

    /// Add a clump-only group.
    #[must_use]
    pub fn clump(self, entities: impl IntoIterator<Item = EntityId>) -> Self {
        self.push(entities, true)
    }

    /// Require groups `a` and `b` to stay disconnected.
    #[must_use]
    pub fn keep_apart(mut self, group_a: usize, group_b: usize) -> Self {
        self.disconnects.push(DisconnectRequirement { group_a, group_b });
        self
    }

    /// Build the quest.
    ///
    /// Fails if a group is empty or a disconnect requirement names a group
    /// that was never added.
    pub fn build(self) -> Result<Quest> {
        if let Some(group) = self.groups.iter().position(EntityGroup::is_empty) {
            return Err(RulesError::EmptyEntityGroup { group });
        }

        let groups = self.groups.len();
        for req in &self.disconnects {
            for group in [req.group_a, req.group_b] {
                if group >= groups {
                    return Err(RulesError::GroupOutOfRange { group, groups });
                }
            }
        }

        Ok(Quest {
            groups: self.groups.into_iter().collect(),
            disconnects: self.disconnects.into_iter().collect(),
        })
    }
}

/// Serialized form of a [`Quest`], validated on the way in.
#[derive(Deserialize)]
struct QuestFields {
    groups: Vec<EntityGroup>,
    disconnects: Vec<DisconnectRequirement>,
}

impl TryFrom<QuestFields> for Quest {
    type Error = RulesError;

    fn try_from(fields: QuestFields) -> Result<Self> {
        QuestBuilder {
            groups: fields.groups,
            disconnects: fields.disconnects,
        }
        .build()
    }
}
