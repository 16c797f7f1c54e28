//! Per-point degree rules.
//!
//! | Point kind | Touches | Outcome |
//! |---|---|---|
//! | entity | 0, 1 | valid |
//! | entity | ≥ 2 | error |
//! | junction | 0, 2 | valid |
//! | junction | 1 | warning (dead end) |
//! | junction | ≥ 3 | error |
//!
//! [`ValidationResult::is_valid`] is true only when there are no entries at
//! all, so a lone warning still makes a board invalid. Use
//! [`ValidationResult::has_errors`] and [`ValidationResult::has_warnings`]
//! to tell severities apart.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PointId, Topology};
use crate::paths::PathNetwork;

/// How bad a degree violation is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

/// A degree rule broken at one point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegreeIssue {
    /// An entity point reached by more than one tile side.
    EntityBranch { touches: u32 },
    /// A junction reached by exactly one tile side.
    DeadEnd,
    /// A junction reached by three or more tile sides.
    OverConnected { touches: u32 },
}

impl DegreeIssue {
    /// Severity of this issue.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            DegreeIssue::DeadEnd => Severity::Warning,
            DegreeIssue::EntityBranch { .. } | DegreeIssue::OverConnected { .. } => Severity::Error,
        }
    }
}

impl std::fmt::Display for DegreeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegreeIssue::EntityBranch { touches } => {
                write!(f, "entity point has {touches} connections (at most 1 allowed)")
            }
            DegreeIssue::DeadEnd => write!(f, "path dead-ends at junction"),
            DegreeIssue::OverConnected { touches } => {
                write!(f, "junction has {touches} connections (0 or 2 allowed)")
            }
        }
    }
}

/// One failing point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationEntry {
    pub point: PointId,
    pub issue: DegreeIssue,
}

impl ValidationEntry {
    /// Severity of the underlying issue.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.issue.severity()
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ValidationEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.point, self.issue)
    }
}

/// Every failing point of a network, in point order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    entries: Vec<ValidationEntry>,
}

impl ValidationResult {
    /// All entries.
    #[must_use]
    pub fn entries(&self) -> &[ValidationEntry] {
        &self.entries
    }

    /// True only when there are no entries, warnings included.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.severity() == Severity::Error)
    }

    /// Whether any entry is a warning.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.entries.iter().any(|e| e.severity() == Severity::Warning)
    }

    /// Entries of one severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ValidationEntry> {
        self.entries.iter().filter(move |e| e.severity() == severity)
    }
}

/// Checks every point's touch count against the degree rules.
#[derive(Clone, Debug, Default)]
pub struct ConnectionValidator {
    topology: Topology,
}

impl ConnectionValidator {
    /// Create a validator over `topology`.
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self { topology }
    }

    /// The issue at `point` given `touches`, if any.
    #[must_use]
    pub fn check_point(&self, point: PointId, touches: u32) -> Option<DegreeIssue> {
        if self.topology.is_entity_point(point) {
            match touches {
                0 | 1 => None,
                _ => Some(DegreeIssue::EntityBranch { touches }),
            }
        } else {
            match touches {
                0 | 2 => None,
                1 => Some(DegreeIssue::DeadEnd),
                _ => Some(DegreeIssue::OverConnected { touches }),
            }
        }
    }

    /// Collect every failing point of `network`.
    #[must_use]
    pub fn validate(&self, network: &PathNetwork) -> ValidationResult {
        let entries: Vec<ValidationEntry> = PointId::all()
            .filter_map(|point| {
                self.check_point(point, network.touch_count(point))
                    .map(|issue| ValidationEntry { point, issue })
            })
            .collect();

        if !entries.is_empty() {
            debug!(entries = entries.len(), "connection validation found issues");
        }
        ValidationResult { entries }
    }

    /// Boolean-only check, same outcome as `validate(network).is_valid()`.
    #[must_use]
    pub fn is_valid(&self, network: &PathNetwork) -> bool {
        PointId::all().all(|point| self.check_point(point, network.touch_count(point)).is_none())
    }
}
