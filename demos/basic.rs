use sellable::{
    evaluate_rule, Configuration, EvaluationContext, InventoryContext, InventoryProtection, Mode,
};

fn main() {
    // A small inclusion policy: grocery items are sellable, protected by a
    // safety stock of 10 units.
    let config = Configuration::builder("demo-1", "grocery allowlist")
        .mode(Mode::Inclusion)
        .item_rule("grocery", |c| c.categories(["Grocery"]).statuses(["Active"]))
        .inventory_protection(InventoryProtection {
            enabled: true,
            safety_stock: 10,
            protection_threshold: 5,
            ..InventoryProtection::default()
        })
        .build()
        .expect("failed to build configuration");

    println!("{config}");

    let ctx = EvaluationContext::new()
        .with_product("SNK-001", "Grocery", "Snack", "Active")
        .with_inventory(InventoryContext {
            available_qty: 42,
            reserved_qty: 3,
        });

    let result = evaluate_rule(&config, &ctx);
    println!("{result}");
    for rule in &result.matched_rules {
        println!(
            "  matched {} ({}, priority {}): {:?}",
            rule.rule_id, rule.category, rule.priority, rule.conditions_met
        );
    }
    for reason in &result.availability.reasons {
        println!("  reason: {reason}");
    }
}
