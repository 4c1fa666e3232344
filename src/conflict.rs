//! Static conflict analysis over a configuration.
//!
//! Three independent passes run over the configuration's shape alone; no
//! evaluation context or live inventory is consulted. Results are
//! concatenated without cross-pass deduplication. Conflicts are advisory:
//! the detector never mutates the configuration or blocks evaluation.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::types::{
    AffectedItems, ConflictKind, Configuration, ItemCondition, Mode, RuleConflict, Severity,
};

/// Detect conflicts in a configuration using the system clock for
/// `created_at` stamps.
///
/// Call-shape-compatible with the configuration-save workflow; prefer
/// [`Engine::detect_conflicts()`](crate::Engine::detect_conflicts) when a
/// deterministic clock matters.
#[must_use]
pub fn detect_conflicts(config: &Configuration) -> Vec<RuleConflict> {
    detect(config, Utc::now())
}

pub(crate) fn detect(config: &Configuration, now: DateTime<Utc>) -> Vec<RuleConflict> {
    let mut conflicts = Vec::new();

    conflicts.extend(item_overlaps(config, now));
    conflicts.extend(contradictions(config, now));
    conflicts.extend(unreachable_rules(config, now));

    debug!(
        config = %config.id,
        conflicts = conflicts.len(),
        "conflict detection complete"
    );

    conflicts
}

fn intersects(a: &[String], b: &[String]) -> bool {
    a.iter().any(|v| b.contains(v))
}

/// Pairwise scan for item conditions claiming the same category and product
/// type. O(n²) over the item list; configurations hold tens of rules, so a
/// category-bucketed index would be premature.
fn item_overlaps(config: &Configuration, now: DateTime<Utc>) -> Vec<RuleConflict> {
    let items = &config.item_conditions;
    let mut conflicts = Vec::new();

    for (i, first) in items.iter().enumerate() {
        for second in &items[i + 1..] {
            if intersects(&first.category, &second.category)
                && intersects(&first.product_type, &second.product_type)
            {
                conflicts.push(RuleConflict {
                    id: format!("overlap-{}-{}", first.id, second.id),
                    config_id: config.id.clone(),
                    kind: ConflictKind::Overlap,
                    severity: Severity::Warning,
                    description: format!(
                        "Rules '{}' and '{}' have overlapping item conditions",
                        first.id, second.id
                    ),
                    rules_involved: vec![first.id.clone(), second.id.clone()],
                    affected_items: AffectedItems::default(),
                    suggested_resolution:
                        "Review and consolidate overlapping rules or adjust priorities".to_owned(),
                    resolved: false,
                    created_at: now,
                });
            }
        }
    }

    conflicts
}

/// Self-defeating settings: protection switched on with nothing to protect.
fn contradictions(config: &Configuration, now: DateTime<Utc>) -> Vec<RuleConflict> {
    let protection = &config.inventory_protection;
    let mut conflicts = Vec::new();

    if protection.enabled && protection.safety_stock == 0 {
        conflicts.push(RuleConflict {
            id: "contradiction-inventory-protection".to_owned(),
            config_id: config.id.clone(),
            kind: ConflictKind::Contradiction,
            severity: Severity::Warning,
            description: "Inventory protection is enabled but safety stock is set to 0".to_owned(),
            rules_involved: vec!["inventory_protection".to_owned()],
            affected_items: AffectedItems::default(),
            suggested_resolution:
                "Set a non-zero safety stock value or disable inventory protection".to_owned(),
            resolved: false,
            created_at: now,
        });
    }

    conflicts
}

/// Every facet wildcarded makes a condition match any item. The status
/// facet is not part of the catch-all test.
fn is_catch_all(condition: &ItemCondition) -> bool {
    condition.category.is_empty()
        && condition.product_type.is_empty()
        && condition.sku_pattern.is_none()
}

/// Under Exclusion mode, a catch-all that is not the lowest-precedence item
/// rule shadows everything ranked after it: the catch-all excludes every
/// item first, so later rules never change the outcome.
fn unreachable_rules(config: &Configuration, now: DateTime<Utc>) -> Vec<RuleConflict> {
    let mut conflicts = Vec::new();

    if config.mode != Mode::Exclusion {
        return conflicts;
    }

    // Precedence is priority order, which equals storage order under the
    // builder's default numbering.
    let mut by_priority: Vec<&ItemCondition> = config.item_conditions.iter().collect();
    by_priority.sort_by_key(|c| c.priority);

    let catch_all_position = by_priority.iter().position(|c| is_catch_all(c));
    if let Some(position) = catch_all_position {
        if position + 1 < by_priority.len() {
            let catch_all = by_priority[position];
            conflicts.push(RuleConflict {
                id: format!("unreachable-{}", catch_all.id),
                config_id: config.id.clone(),
                kind: ConflictKind::Unreachable,
                severity: Severity::Error,
                description: format!(
                    "Rule '{}' is a catch-all exclusion that makes lower-priority rules unreachable",
                    catch_all.id
                ),
                rules_involved: vec![catch_all.id.clone()],
                affected_items: AffectedItems::default(),
                suggested_resolution: "Move catch-all rule to the end or make it more specific"
                    .to_owned(),
                resolved: false,
                created_at: now,
            });
        }
    }

    conflicts
}
