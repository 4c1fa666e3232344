use sellable::{detect_conflicts, validate_rule_priority, Configuration, Mode};

fn main() {
    // An exclusion policy with three authoring mistakes: two overlapping
    // soda rules, a shadowing catch-all, and protection with no stock.
    let config = Configuration::builder("demo-2", "blocklist with problems")
        .mode(Mode::Exclusion)
        .item_rule("colas", |c| c.categories(["Beverage"]).product_types(["Soda"]))
        .item_rule("all-soda", |c| c.categories(["Beverage"]).product_types(["Soda"]))
        .item_rule("everything", |c| c)
        .item_rule("unreachable", |c| c.categories(["Grocery"]).priority(9))
        .inventory_protection(sellable::InventoryProtection {
            enabled: true,
            safety_stock: 0,
            ..sellable::InventoryProtection::default()
        })
        .build()
        .expect("failed to build configuration");

    for conflict in detect_conflicts(&config) {
        println!("{conflict}");
        println!("  -> {}", conflict.suggested_resolution);
    }

    let report = validate_rule_priority(&config);
    println!("{report}");
}
