use std::fmt;

/// The closed set of condition categories the evaluator understands.
///
/// Adding a category means extending this enum; every `match` over it is
/// exhaustive, so the evaluator and resolver fail to compile until the new
/// category is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleCategory {
    Item,
    Location,
    SupplyType,
    InventoryProtection,
    Commerce,
}

/// How a category's facet results gate a whole-condition match.
///
/// Item and supply-type conditions require every facet to pass; location,
/// inventory-protection, and commerce conditions match on any passing facet.
/// The asymmetry is deliberate: an item rule pins down a product, while a
/// location rule claims a territory from whichever facets the caller
/// supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Every facet of the condition must pass.
    All,
    /// At least one facet must pass.
    Any,
}

impl MatchPolicy {
    /// Whether `met` passing facets out of `total` satisfy this policy.
    #[must_use]
    pub fn satisfied(self, met: usize, total: usize) -> bool {
        match self {
            MatchPolicy::All => total > 0 && met == total,
            MatchPolicy::Any => met > 0,
        }
    }
}

impl RuleCategory {
    /// The facet-gating policy for this category.
    #[must_use]
    pub const fn match_policy(self) -> MatchPolicy {
        match self {
            RuleCategory::Item | RuleCategory::SupplyType => MatchPolicy::All,
            RuleCategory::Location
            | RuleCategory::InventoryProtection
            | RuleCategory::Commerce => MatchPolicy::Any,
        }
    }

    /// Whether matches in this category count toward the availability
    /// decision. Supply-type matches only select the source label.
    #[must_use]
    pub const fn gates_availability(self) -> bool {
        !matches!(self, RuleCategory::SupplyType)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Item => "item",
            RuleCategory::Location => "location",
            RuleCategory::SupplyType => "supply_type",
            RuleCategory::InventoryProtection => "inventory_protection",
            RuleCategory::Commerce => "commerce",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule that matched during one evaluation, with the sub-conditions that
/// passed. Created and discarded within a single evaluation call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchedRule {
    pub rule_id: String,
    #[cfg_attr(feature = "serde", serde(rename = "rule_category"))]
    pub category: RuleCategory,
    pub priority: u32,
    pub conditions_met: Vec<String>,
}
