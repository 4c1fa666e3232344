use std::fmt;

use chrono::{DateTime, Utc};

/// Kinds of configuration conflicts the static analyzer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConflictKind {
    Overlap,
    Contradiction,
    Unreachable,
}

/// Conflict severity. `Error` signals the configuration editor to block
/// publishing; it is never an engine-level fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Warning,
    Error,
}

/// Items affected by a conflict. Populated only when inventory data is on
/// hand; the static analyzer always reports zero with no examples.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffectedItems {
    pub count: u32,
    pub examples: Vec<String>,
}

/// An advisory diagnostic produced by
/// [`Engine::detect_conflicts()`](crate::Engine::detect_conflicts).
///
/// Conflicts are persisted by the configuration workflow, which also owns
/// the `resolved` flag; the engine only ever creates them with
/// `resolved = false`. Ids are derived from the rules involved, so repeated
/// detection over an unchanged configuration reproduces identical records
/// except for `created_at`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleConflict {
    pub id: String,
    pub config_id: String,
    #[cfg_attr(feature = "serde", serde(rename = "conflict_type"))]
    pub kind: ConflictKind,
    pub severity: Severity,
    pub description: String,
    pub rules_involved: Vec<String>,
    pub affected_items: AffectedItems,
    pub suggested_resolution: String,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for RuleConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}/{:?}] {}", self.kind, self.severity, self.description)
    }
}
