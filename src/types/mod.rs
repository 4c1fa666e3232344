mod config;
mod conflict;
mod context;
mod error;
mod matched;
mod result;

pub use config::{
    ChannelRule, CommerceCharacteristic, ConfigBuilder, ConfigStatus, Configuration,
    InventoryProtection, ItemCondition, ItemRuleBuilder, LocationCondition, LocationRuleBuilder,
    Mode, ReservedInventoryConfig, SafetyStockMode, SafetyStockSettings, SupplyRuleBuilder,
    SupplySource, SupplyTypeCondition,
};
pub use conflict::{AffectedItems, ConflictKind, RuleConflict, Severity};
pub use context::{
    CommerceContext, EvaluationContext, InventoryContext, LocationContext, ProductContext,
};
pub use error::ConfigError;
pub use matched::{MatchPolicy, MatchedRule, RuleCategory};
pub use result::{Availability, RuleTestResult};
