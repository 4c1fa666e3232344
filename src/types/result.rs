use std::fmt;

use chrono::{DateTime, Utc};

use super::config::SupplySource;
use super::matched::MatchedRule;

/// The resolved availability verdict for one evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Availability {
    pub is_available: bool,
    /// Sellable quantity after protection deductions, floored at zero.
    pub quantity: u32,
    /// Which supply source serves the item. Defaults to
    /// [`SupplySource::Warehouse`] unless a supply-type rule matched.
    pub source: SupplySource,
    /// Human-readable explanations, in the order they were determined.
    pub reasons: Vec<String>,
}

/// Output of [`Engine::evaluate()`](crate::Engine::evaluate).
///
/// `matched_rules` is sorted by ascending priority. `execution_time_ms` is
/// measured with a monotonic clock around the whole evaluate-and-resolve
/// call and is present on every result, available or not.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct RuleTestResult {
    pub passed: bool,
    pub matched_rules: Vec<MatchedRule>,
    pub availability: Availability,
    pub execution_time_ms: f64,
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for RuleTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} rule(s) matched, qty {}, source {})",
            if self.availability.is_available {
                "available"
            } else {
                "not available"
            },
            self.matched_rules.len(),
            self.availability.quantity,
            self.availability.source,
        )
    }
}
