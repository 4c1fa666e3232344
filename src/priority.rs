//! Priority sequence validation for item conditions.

use std::fmt;

use crate::types::Configuration;

/// Outcome of [`validate_rule_priority`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct PriorityReport {
    pub valid: bool,
    pub issues: Vec<String>,
}

impl fmt::Display for PriorityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "priorities valid")
        } else {
            write!(f, "priorities invalid: {}", self.issues.join("; "))
        }
    }
}

/// Check that the item-condition priority sequence is well-formed: no two
/// conditions share a priority, and consecutive priorities (sorted) differ
/// by at most one.
///
/// Configurations built through [`ConfigBuilder`](crate::ConfigBuilder)
/// without explicit overrides always pass, since the builder numbers
/// conditions sequentially; explicit `.priority(n)` overrides are what this
/// guard exists for.
pub fn validate_rule_priority(config: &Configuration) -> PriorityReport {
    let mut issues = Vec::new();

    let mut ranked: Vec<(u32, &str)> = config
        .item_conditions
        .iter()
        .map(|c| (c.priority, c.id.as_str()))
        .collect();
    ranked.sort_by_key(|(priority, _)| *priority);

    for pair in ranked.windows(2) {
        let (prev, prev_id) = pair[0];
        let (next, next_id) = pair[1];
        if prev == next {
            issues.push(format!(
                "duplicate priority {prev} shared by rules '{prev_id}' and '{next_id}'"
            ));
        } else if next - prev > 1 {
            issues.push(format!("gap in priority sequence between {prev} and {next}"));
        }
    }

    PriorityReport {
        valid: issues.is_empty(),
        issues,
    }
}
