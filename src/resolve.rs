//! Availability resolution: turns a matched-rule list into a verdict.

use crate::matchers::effective_safety_stock;
use crate::types::{
    Availability, Configuration, EvaluationContext, MatchedRule, Mode, RuleCategory, SupplySource,
};

/// Resolve the final availability verdict for one evaluation.
///
/// Never fails: absent context slices contribute zero quantity and the
/// arithmetic saturates instead of wrapping.
pub(crate) fn resolve(
    config: &Configuration,
    matched_rules: &[MatchedRule],
    ctx: &EvaluationContext,
) -> Availability {
    // Supply-type matches only pick the source label; they never decide
    // whether the item is sellable.
    let gating_matches = matched_rules
        .iter()
        .filter(|r| r.category.gates_availability())
        .count();
    let has_matches = gating_matches > 0;
    let mut reasons = Vec::new();

    // The central inversion: under Exclusion mode a match blocks the item.
    let mut is_available = match config.mode {
        Mode::Inclusion => has_matches,
        Mode::Exclusion => !has_matches,
    };

    let mut quantity = ctx.inventory.map_or(0, |inv| inv.available_qty);

    let protection = &config.inventory_protection;
    if protection.enabled {
        let safety_stock = effective_safety_stock(protection, quantity);
        let reserved = ctx.inventory.map_or(0, |inv| inv.reserved_qty);
        quantity = quantity.saturating_sub(safety_stock).saturating_sub(reserved);

        if quantity < protection.protection_threshold {
            is_available = false;
            reasons.push("Below protection threshold".to_owned());
        }
    }

    let source = resolve_source(config, matched_rules);

    match config.mode {
        Mode::Inclusion => {
            if has_matches {
                reasons.push(format!("Matched {gating_matches} inclusion rule(s)"));
            } else {
                reasons.push("No matching inclusion rules".to_owned());
            }
        }
        Mode::Exclusion => {
            if has_matches {
                reasons.push(format!(
                    "Matched {gating_matches} exclusion rule(s) - item blocked"
                ));
            } else {
                reasons.push("No exclusion rules matched - item available".to_owned());
            }
        }
    }

    Availability {
        // A zero-quantity item is never available, whatever the rules say.
        is_available: is_available && quantity > 0,
        quantity,
        source,
        reasons,
    }
}

/// Source label for the verdict: the first matched supply-type rule's
/// configured source, or the warehouse default.
fn resolve_source(config: &Configuration, matched_rules: &[MatchedRule]) -> SupplySource {
    matched_rules
        .iter()
        .find(|r| r.category == RuleCategory::SupplyType)
        .and_then(|supply_match| {
            config
                .supply_type_conditions
                .iter()
                .find(|c| c.id == supply_match.rule_id)
        })
        .map_or(SupplySource::Warehouse, |c| c.source)
}
