//! Availability-to-commerce rule engine: decides whether, and in what
//! quantity, an item is sellable for a given product/location/inventory/
//! commerce context, based on a versioned configuration of inclusion or
//! exclusion rules, inventory-protection settings, and commerce-channel
//! constraints. Includes a static conflict analyzer and a priority
//! validator for configuration-save workflows.

mod clock;
mod conflict;
mod evaluate;
mod matchers;
mod priority;
mod resolve;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use conflict::detect_conflicts;
pub use evaluate::{
    COMMERCE_PRIORITY, COMMERCE_RULE_ID, Engine, INVENTORY_PROTECTION_PRIORITY,
    INVENTORY_PROTECTION_RULE_ID, evaluate_rule,
};
pub use priority::{PriorityReport, validate_rule_priority};
pub use types::{
    AffectedItems, Availability, ChannelRule, CommerceCharacteristic, CommerceContext,
    ConfigBuilder, ConfigError, ConfigStatus, Configuration, ConflictKind, EvaluationContext,
    InventoryContext, InventoryProtection, ItemCondition, ItemRuleBuilder, LocationCondition,
    LocationContext, LocationRuleBuilder, MatchPolicy, MatchedRule, Mode, ProductContext,
    ReservedInventoryConfig, RuleCategory, RuleConflict, RuleTestResult, SafetyStockMode,
    SafetyStockSettings, Severity, SupplyRuleBuilder, SupplySource, SupplyTypeCondition,
};
