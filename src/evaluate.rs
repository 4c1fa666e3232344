use std::time::Instant;

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::types::{
    Configuration, EvaluationContext, MatchedRule, RuleCategory, RuleConflict, RuleTestResult,
};
use crate::{conflict, matchers, resolve};

/// Fixed priority of the inventory-protection pseudo-rule, ranked above all
/// ordinary item/location rules.
pub const INVENTORY_PROTECTION_PRIORITY: u32 = 100;

/// Fixed priority of the commerce-characteristic pseudo-rule.
pub const COMMERCE_PRIORITY: u32 = 90;

/// Rule id reported for inventory-protection matches, which come from the
/// configuration's single protection block rather than a condition list.
pub const INVENTORY_PROTECTION_RULE_ID: &str = "inventory_protection";

/// Rule id reported for commerce-characteristic matches.
pub const COMMERCE_RULE_ID: &str = "commerce_characteristic";

/// The availability-to-commerce evaluator.
///
/// Holds the injected [`Clock`] used to stamp results and conflicts; all
/// actual rule state lives in the [`Configuration`] passed per call, so one
/// engine can score any number of configurations from any number of threads.
///
/// # Example
///
/// ```
/// use sellable::{Configuration, Engine, EvaluationContext, InventoryContext, Mode};
///
/// let config = Configuration::builder("cfg-1", "grocery allowlist")
///     .mode(Mode::Inclusion)
///     .item_rule("grocery", |c| c.categories(["Grocery"]))
///     .build()
///     .unwrap();
///
/// let ctx = EvaluationContext::new()
///     .with_product("SKU1", "Grocery", "Snack", "Active")
///     .with_inventory(InventoryContext { available_qty: 25, reserved_qty: 0 });
///
/// let result = Engine::new().evaluate(&config, &ctx);
/// assert!(result.availability.is_available);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine<C: Clock = SystemClock> {
    clock: C,
}

impl Engine<SystemClock> {
    /// Create an engine backed by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Engine<C> {
    /// Create an engine with an injected clock. Pair with
    /// [`FixedClock`](crate::FixedClock) for deterministic timestamps.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Evaluate a configuration against a per-call context.
    ///
    /// Runs every matcher category whose context slice is present, emits a
    /// [`MatchedRule`] per condition that satisfies its category's
    /// [`MatchPolicy`](crate::MatchPolicy), and resolves the final
    /// availability verdict. Infallible by contract: malformed-but-present
    /// data degrades to non-matches, never to an error.
    pub fn evaluate(&self, config: &Configuration, ctx: &EvaluationContext) -> RuleTestResult {
        let started = Instant::now();
        let mut matched_rules = Vec::new();

        if let Some(product) = &ctx.product {
            let policy = RuleCategory::Item.match_policy();
            for condition in &config.item_conditions {
                let met = matchers::item_facets(condition, product);
                if policy.satisfied(met.len(), matchers::ITEM_FACETS) {
                    matched_rules.push(rule(&condition.id, RuleCategory::Item, condition.priority, met));
                }
            }
        }

        if let Some(location) = &ctx.location {
            let policy = RuleCategory::Location.match_policy();
            for condition in &config.location_conditions {
                let met = matchers::location_facets(condition, location);
                if policy.satisfied(met.len(), matchers::LOCATION_FACETS) {
                    matched_rules.push(rule(
                        &condition.id,
                        RuleCategory::Location,
                        condition.priority,
                        met,
                    ));
                }
            }
        }

        if let Some(supply) = ctx.supply {
            let policy = RuleCategory::SupplyType.match_policy();
            for condition in &config.supply_type_conditions {
                let met = matchers::supply_facets(condition, supply);
                if policy.satisfied(met.len(), matchers::SUPPLY_FACETS) {
                    matched_rules.push(rule(
                        &condition.id,
                        RuleCategory::SupplyType,
                        condition.priority,
                        met,
                    ));
                }
            }
        }

        if config.inventory_protection.enabled {
            if let Some(inventory) = &ctx.inventory {
                let policy = RuleCategory::InventoryProtection.match_policy();
                let met = matchers::protection_facets(&config.inventory_protection, inventory);
                if policy.satisfied(met.len(), matchers::PROTECTION_FACETS) {
                    matched_rules.push(rule(
                        INVENTORY_PROTECTION_RULE_ID,
                        RuleCategory::InventoryProtection,
                        INVENTORY_PROTECTION_PRIORITY,
                        met,
                    ));
                }
            }
        }

        if config.commerce_characteristic.enabled {
            if let Some(commerce) = &ctx.commerce {
                let policy = RuleCategory::Commerce.match_policy();
                let met = matchers::commerce_facets(&config.commerce_characteristic, commerce);
                if policy.satisfied(met.len(), matchers::COMMERCE_FACETS) {
                    matched_rules.push(rule(
                        COMMERCE_RULE_ID,
                        RuleCategory::Commerce,
                        COMMERCE_PRIORITY,
                        met,
                    ));
                }
            }
        }

        matched_rules.sort_by_key(|r| r.priority);

        let availability = resolve::resolve(config, &matched_rules, ctx);
        let execution_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        debug!(
            config = %config.id,
            matched = matched_rules.len(),
            available = availability.is_available,
            quantity = availability.quantity,
            "evaluated configuration"
        );

        RuleTestResult {
            passed: availability.is_available,
            matched_rules,
            availability,
            execution_time_ms,
            timestamp: self.clock.now(),
        }
    }

    /// Statically analyze a configuration for rule conflicts.
    ///
    /// See [`detect_conflicts`](crate::detect_conflicts) for the
    /// free-function form.
    pub fn detect_conflicts(&self, config: &Configuration) -> Vec<RuleConflict> {
        conflict::detect(config, self.clock.now())
    }
}

fn rule(id: &str, category: RuleCategory, priority: u32, met: Vec<&'static str>) -> MatchedRule {
    MatchedRule {
        rule_id: id.to_owned(),
        category,
        priority,
        conditions_met: met.into_iter().map(ToOwned::to_owned).collect(),
    }
}

/// Evaluate a configuration against a context using the system clock.
///
/// Convenience wrapper over [`Engine::evaluate()`] preserving the call shape
/// used by the live-scoring path and the interactive rule tester.
pub fn evaluate_rule(config: &Configuration, ctx: &EvaluationContext) -> RuleTestResult {
    Engine::new().evaluate(config, ctx)
}
