#![cfg(feature = "serde")]

use sellable::{
    detect_conflicts, evaluate_rule, Configuration, EvaluationContext, InventoryContext, Mode,
    SupplySource,
};

const PERSISTED_CONFIG: &str = r#"{
  "id": "cfg-9",
  "name": "summer exclusions",
  "version": 4,
  "status": "active",
  "mode": "exclusion",
  "item_conditions": [
    {
      "id": "tobacco",
      "priority": 1,
      "category": ["Tobacco"],
      "product_type": [],
      "sku_pattern": null,
      "status": []
    }
  ],
  "location_conditions": [],
  "supply_type_conditions": [
    { "id": "preorder-lane", "priority": 1, "type": "preorder", "lead_time": 14 }
  ],
  "inventory_protection": {
    "enabled": true,
    "safety_stock": 10,
    "safety_stock_settings": { "type": "percentage", "value": 10.0 },
    "reserved_inventory": false,
    "reserved_inventory_config": null,
    "protection_threshold": 5
  },
  "commerce_characteristic": {
    "enabled": false,
    "channels": [],
    "order_types": [],
    "customer_segments": [],
    "channel_rules": []
  }
}"#;

#[test]
fn persisted_document_deserializes_and_evaluates() {
    let config: Configuration = serde_json::from_str(PERSISTED_CONFIG).unwrap();
    assert_eq!(config.mode, Mode::Exclusion);
    assert_eq!(config.supply_type_conditions[0].source, SupplySource::Preorder);

    let ctx = EvaluationContext::new()
        .with_product("CIG-001", "Tobacco", "Cigarette", "Active")
        .with_inventory(InventoryContext {
            available_qty: 100,
            reserved_qty: 0,
        });
    let result = evaluate_rule(&config, &ctx);
    assert!(!result.availability.is_available);
    assert_eq!(result.matched_rules[0].rule_id, "tobacco");
}

#[test]
fn roundtrip_preserves_the_document() {
    let config: Configuration = serde_json::from_str(PERSISTED_CONFIG).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let again: Configuration = serde_json::from_str(&json).unwrap();
    assert_eq!(config, again);
}

#[test]
fn conflicts_serialize_with_wire_field_names() {
    let config = Configuration::builder("cfg-1", "overlap")
        .item_rule("a", |c| c.categories(["Beverage"]).product_types(["Soda"]))
        .item_rule("b", |c| c.categories(["Beverage"]).product_types(["Soda"]))
        .build()
        .unwrap();

    let conflicts = detect_conflicts(&config);
    let value = serde_json::to_value(&conflicts[0]).unwrap();
    assert_eq!(value["conflict_type"], "overlap");
    assert_eq!(value["severity"], "warning");
    assert_eq!(value["rules_involved"][0], "a");
}
