use chrono::{TimeZone, Utc};
use sellable::{
    detect_conflicts, evaluate_rule, validate_rule_priority, Configuration, ConflictKind, Engine,
    EvaluationContext, FixedClock, InventoryContext, InventoryProtection, Mode, Severity,
    SupplySource,
};

fn grocery_ctx(available: u32) -> EvaluationContext {
    EvaluationContext::new()
        .with_product("SKU1", "Grocery", "Snack", "Active")
        .with_inventory(InventoryContext {
            available_qty: available,
            reserved_qty: 0,
        })
}

#[test]
fn inclusion_grocery_rule_makes_item_available() {
    let config = Configuration::builder("cfg-1", "grocery allowlist")
        .mode(Mode::Inclusion)
        .item_rule("grocery", |c| c.categories(["Grocery"]))
        .build()
        .unwrap();

    let result = evaluate_rule(&config, &grocery_ctx(100));
    assert_eq!(result.matched_rules.len(), 1);
    assert!(result.availability.is_available);
    assert_eq!(result.availability.quantity, 100);
}

#[test]
fn exclusion_same_rule_blocks_item() {
    let config = Configuration::builder("cfg-1", "grocery blocklist")
        .mode(Mode::Exclusion)
        .item_rule("grocery", |c| c.categories(["Grocery"]))
        .build()
        .unwrap();

    let result = evaluate_rule(&config, &grocery_ctx(100));
    assert!(!result.availability.is_available);
    assert!(result
        .availability
        .reasons
        .iter()
        .any(|r| r.contains("item blocked")));
}

#[test]
fn safety_stock_above_on_hand_floors_quantity() {
    let config = Configuration::builder("cfg-1", "protected")
        .mode(Mode::Exclusion)
        .inventory_protection(InventoryProtection {
            enabled: true,
            safety_stock: 50,
            protection_threshold: 0,
            ..InventoryProtection::default()
        })
        .build()
        .unwrap();

    let result = evaluate_rule(&config, &grocery_ctx(40));
    assert_eq!(result.availability.quantity, 0);
    assert!(!result.availability.is_available);
}

#[test]
fn below_threshold_reports_reason() {
    let config = Configuration::builder("cfg-1", "thresholded")
        .mode(Mode::Exclusion)
        .inventory_protection(InventoryProtection {
            enabled: true,
            safety_stock: 10,
            protection_threshold: 60,
            ..InventoryProtection::default()
        })
        .build()
        .unwrap();

    let result = evaluate_rule(&config, &grocery_ctx(50));
    assert!(!result.availability.is_available);
    assert_eq!(result.availability.reasons[0], "Below protection threshold");
}

#[test]
fn overlapping_beverage_rules_yield_one_overlap_conflict() {
    let config = Configuration::builder("cfg-1", "beverages")
        .item_rule("colas", |c| c.categories(["Beverage"]).product_types(["Soda"]))
        .item_rule("all-soda", |c| c.categories(["Beverage"]).product_types(["Soda"]))
        .build()
        .unwrap();

    let conflicts = detect_conflicts(&config);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::Overlap);
    assert_eq!(conflicts[0].rules_involved, vec!["colas", "all-soda"]);
}

#[test]
fn exclusion_catch_all_shadowing_is_an_error() {
    let config = Configuration::builder("cfg-1", "shadowed")
        .mode(Mode::Exclusion)
        .item_rule("everything", |c| c)
        .item_rule("specific", |c| c.categories(["Grocery"]))
        .build()
        .unwrap();

    let conflicts = detect_conflicts(&config);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::Unreachable);
    assert_eq!(conflicts[0].severity, Severity::Error);
    assert_eq!(conflicts[0].rules_involved, vec!["everything"]);
}

#[test]
fn evaluation_never_fails_on_empty_input() {
    let config = Configuration::builder("cfg-1", "empty")
        .mode(Mode::Inclusion)
        .build()
        .unwrap();
    let result = evaluate_rule(&config, &EvaluationContext::new());
    assert!(!result.passed);
    assert!(result.matched_rules.is_empty());
    assert_eq!(result.availability.quantity, 0);
    assert!(result.execution_time_ms >= 0.0);
}

#[test]
fn partial_location_context_still_matches() {
    let config = Configuration::builder("cfg-1", "east-coast")
        .mode(Mode::Inclusion)
        .location_rule("east", |c| c.regions(["east"]))
        .build()
        .unwrap();

    let ctx = EvaluationContext::new()
        .with_location(sellable::LocationContext {
            region: Some("east".into()),
            ..sellable::LocationContext::default()
        })
        .with_inventory(InventoryContext {
            available_qty: 5,
            reserved_qty: 0,
        });

    let result = evaluate_rule(&config, &ctx);
    assert!(result.availability.is_available);
}

#[test]
fn supply_context_selects_source_label() {
    let config = Configuration::builder("cfg-1", "preorders")
        .mode(Mode::Exclusion)
        .supply_rule("preorder-lane", SupplySource::Preorder, |c| c.lead_time(14))
        .build()
        .unwrap();

    let ctx = EvaluationContext::new()
        .with_supply(SupplySource::Preorder)
        .with_inventory(InventoryContext {
            available_qty: 10,
            reserved_qty: 0,
        });

    let result = evaluate_rule(&config, &ctx);
    assert_eq!(result.availability.source, SupplySource::Preorder);
    assert!(result.availability.is_available);
}

#[test]
fn engine_with_fixed_clock_is_fully_deterministic() {
    let instant = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let engine = Engine::with_clock(FixedClock(instant));

    let config = Configuration::builder("cfg-1", "repeat")
        .mode(Mode::Exclusion)
        .item_rule("a", |c| c.categories(["X"]).product_types(["Y"]))
        .item_rule("b", |c| c.categories(["X"]).product_types(["Y"]))
        .build()
        .unwrap();

    assert_eq!(engine.detect_conflicts(&config), engine.detect_conflicts(&config));

    let first = engine.evaluate(&config, &grocery_ctx(10));
    let second = engine.evaluate(&config, &grocery_ctx(10));
    assert_eq!(first.matched_rules, second.matched_rules);
    assert_eq!(first.availability, second.availability);
    assert_eq!(first.timestamp, instant);
}

#[test]
fn priority_validation_flags_explicit_overrides_only() {
    let sequential = Configuration::builder("cfg-1", "fine")
        .item_rule("a", |c| c)
        .item_rule("b", |c| c)
        .build()
        .unwrap();
    assert!(validate_rule_priority(&sequential).valid);

    let gapped = Configuration::builder("cfg-2", "gapped")
        .item_rule("a", |c| c.priority(1))
        .item_rule("b", |c| c.priority(5))
        .build()
        .unwrap();
    let report = validate_rule_priority(&gapped);
    assert!(!report.valid);
    assert_eq!(report.issues.len(), 1);
}

#[test]
fn many_rules_one_sweep() {
    let mut builder = Configuration::builder("cfg-big", "sweep").mode(Mode::Inclusion);
    for i in 0..64 {
        let category = if i % 2 == 0 { "Grocery" } else { "Hardware" };
        builder = builder.item_rule(&format!("r{i}"), |c| c.categories([category]));
    }
    let config = builder.build().unwrap();

    let result = evaluate_rule(&config, &grocery_ctx(10));
    // Every even-indexed rule matches the Grocery product.
    assert_eq!(result.matched_rules.len(), 32);
    let priorities: Vec<u32> = result.matched_rules.iter().map(|r| r.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort_unstable();
    assert_eq!(priorities, sorted);
}
