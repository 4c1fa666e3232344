use std::sync::Arc;
use std::thread;

use sellable::{Configuration, Engine, EvaluationContext, InventoryContext, Mode};

#[test]
fn evaluate_across_threads() {
    let config = Arc::new(
        Configuration::builder("cfg-threads", "grocery allowlist")
            .mode(Mode::Inclusion)
            .item_rule("grocery", |c| c.categories(["Grocery"]).statuses(["Active"]))
            .build()
            .unwrap(),
    );

    let mut handles = vec![];

    // Thread 1: matching grocery item with stock on hand -> available
    let cfg = Arc::clone(&config);
    handles.push(thread::spawn(move || {
        let ctx = EvaluationContext::new()
            .with_product("SNK-1", "Grocery", "Snack", "Active")
            .with_inventory(InventoryContext {
                available_qty: 100,
                reserved_qty: 0,
            });
        Engine::new().evaluate(&cfg, &ctx)
    }));

    // Thread 2: non-grocery item -> no match, not available
    let cfg = Arc::clone(&config);
    handles.push(thread::spawn(move || {
        let ctx = EvaluationContext::new()
            .with_product("TV-1", "Electronics", "TV", "Active")
            .with_inventory(InventoryContext {
                available_qty: 100,
                reserved_qty: 0,
            });
        Engine::new().evaluate(&cfg, &ctx)
    }));

    // Thread 3: matching item with nothing on hand -> zero-quantity override
    let cfg = Arc::clone(&config);
    handles.push(thread::spawn(move || {
        let ctx = EvaluationContext::new()
            .with_product("SNK-2", "Grocery", "Snack", "Active")
            .with_inventory(InventoryContext {
                available_qty: 0,
                reserved_qty: 0,
            });
        Engine::new().evaluate(&cfg, &ctx)
    }));

    // Thread 4: discontinued grocery item -> status facet fails
    let cfg = Arc::clone(&config);
    handles.push(thread::spawn(move || {
        let ctx = EvaluationContext::new()
            .with_product("SNK-3", "Grocery", "Snack", "Discontinued")
            .with_inventory(InventoryContext {
                available_qty: 100,
                reserved_qty: 0,
            });
        Engine::new().evaluate(&cfg, &ctx)
    }));

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results[0].availability.is_available);
    assert_eq!(results[0].availability.quantity, 100);

    assert!(!results[1].availability.is_available);
    assert!(results[1].matched_rules.is_empty());

    assert!(!results[2].availability.is_available);
    assert_eq!(results[2].matched_rules.len(), 1);
    assert_eq!(results[2].availability.quantity, 0);

    assert!(!results[3].availability.is_available);
    assert!(results[3].matched_rules.is_empty());
}

#[test]
fn conflict_detection_runs_concurrently_with_evaluation() {
    let config = Arc::new(
        Configuration::builder("cfg-mixed", "blocklist")
            .mode(Mode::Exclusion)
            .item_rule("a", |c| c.categories(["Beverage"]).product_types(["Soda"]))
            .item_rule("b", |c| c.categories(["Beverage"]).product_types(["Soda"]))
            .build()
            .unwrap(),
    );

    let detector_cfg = Arc::clone(&config);
    let detector = thread::spawn(move || Engine::new().detect_conflicts(&detector_cfg));

    let evaluator_cfg = Arc::clone(&config);
    let evaluator = thread::spawn(move || {
        let ctx = EvaluationContext::new()
            .with_product("SODA-1", "Beverage", "Soda", "Active")
            .with_inventory(InventoryContext {
                available_qty: 10,
                reserved_qty: 0,
            });
        Engine::new().evaluate(&evaluator_cfg, &ctx)
    });

    let conflicts = detector.join().unwrap();
    let result = evaluator.join().unwrap();

    assert_eq!(conflicts.len(), 1);
    assert!(!result.availability.is_available);
}
