use std::collections::HashSet;
use std::fmt;

use super::error::ConfigError;

/// Global evaluation mode of a configuration.
///
/// Under [`Inclusion`](Mode::Inclusion), a matched rule grants availability;
/// under [`Exclusion`](Mode::Exclusion) a matched rule revokes it. The
/// resolver inverts the meaning of "matched" accordingly, so the same
/// condition lists express an allowlist or a blocklist depending on this
/// switch alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    Inclusion,
    Exclusion,
}

/// Lifecycle status of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConfigStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

/// Inventory source kinds a supply-type rule can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SupplySource {
    #[default]
    Warehouse,
    Store,
    Supplier,
    Preorder,
}

impl SupplySource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SupplySource::Warehouse => "warehouse",
            SupplySource::Store => "store",
            SupplySource::Supplier => "supplier",
            SupplySource::Preorder => "preorder",
        }
    }
}

impl fmt::Display for SupplySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item-facing condition. Empty facet lists are wildcards: they match any
/// value, not no value. A fully wildcarded condition (empty `category`,
/// empty `product_type`, no `sku_pattern`) is a catch-all.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCondition {
    pub id: String,
    pub priority: u32,
    pub category: Vec<String>,
    pub product_type: Vec<String>,
    pub sku_pattern: Option<String>,
    pub status: Vec<String>,
}

/// A location-facing condition, same wildcard convention as
/// [`ItemCondition`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationCondition {
    pub id: String,
    pub priority: u32,
    pub stores: Vec<String>,
    pub regions: Vec<String>,
    pub zones: Vec<String>,
    pub warehouses: Vec<String>,
}

/// A supply-type condition. Matching one only selects the availability
/// `source` label; it never gates availability itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupplyTypeCondition {
    pub id: String,
    pub priority: u32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub source: SupplySource,
    /// Lead time in days.
    pub lead_time: u32,
}

/// How a safety-stock value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SafetyStockMode {
    Absolute,
    Percentage,
}

/// Safety-stock override. `Percentage` derives the effective stock from the
/// context's on-hand quantity; `Absolute` uses `value` as a unit count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafetyStockSettings {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub mode: SafetyStockMode,
    pub value: f64,
}

/// Reserved-inventory handling. Auto-release is configuration data carried
/// for the fulfillment layer; the evaluator only reads the parent
/// `reserved_inventory` flag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReservedInventoryConfig {
    pub auto_release_enabled: bool,
    pub auto_release_hours: f64,
}

/// Inventory-protection settings. When `enabled`, safety stock and reserved
/// quantity are deducted from on-hand inventory and the remainder must clear
/// `protection_threshold` for the item to stay available.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryProtection {
    pub enabled: bool,
    pub safety_stock: u32,
    pub safety_stock_settings: Option<SafetyStockSettings>,
    pub reserved_inventory: bool,
    pub reserved_inventory_config: Option<ReservedInventoryConfig>,
    pub protection_threshold: u32,
}

/// Per-channel allocation rule. Carried for the allocation layer; not
/// consulted by the evaluator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelRule {
    pub channel: String,
    pub priority: u32,
    pub allocation_percentage: f64,
    pub enabled: bool,
}

/// Commerce-channel constraints. Empty lists are wildcards.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommerceCharacteristic {
    pub enabled: bool,
    pub channels: Vec<String>,
    pub order_types: Vec<String>,
    pub customer_segments: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub channel_rules: Vec<ChannelRule>,
}

/// A versioned availability-to-commerce policy document.
///
/// Built with [`Configuration::builder()`] or deserialized from the
/// persistence layer. The engine treats it as immutable: evaluation,
/// conflict detection, and priority validation are all pure reads, so a
/// configuration behind `Arc` can serve any number of concurrent calls.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    pub id: String,
    pub name: String,
    pub version: u32,
    pub status: ConfigStatus,
    pub mode: Mode,
    pub item_conditions: Vec<ItemCondition>,
    pub location_conditions: Vec<LocationCondition>,
    pub supply_type_conditions: Vec<SupplyTypeCondition>,
    pub inventory_protection: InventoryProtection,
    pub commerce_characteristic: CommerceCharacteristic,
}

impl Configuration {
    /// Start building a configuration with the given document id and name.
    #[must_use]
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(id, name)
    }
}

/// Builder for [`Configuration`].
///
/// Conditions are defined via closures and validated once in
/// [`build()`](ConfigBuilder::build). Priorities default to the 1-based
/// insertion position within each condition list; set one explicitly with
/// the per-condition `.priority(n)` to decouple ordering from storage.
///
/// # Example
///
/// ```
/// use sellable::{Configuration, Mode};
///
/// let config = Configuration::builder("cfg-1", "grocery allowlist")
///     .mode(Mode::Inclusion)
///     .item_rule("grocery", |c| c.categories(["Grocery"]))
///     .item_rule("fresh", |c| c.categories(["Produce"]).statuses(["Active"]))
///     .build()
///     .unwrap();
/// assert_eq!(config.item_conditions[1].priority, 2);
/// ```
#[derive(Debug)]
pub struct ConfigBuilder {
    id: String,
    name: String,
    version: u32,
    status: ConfigStatus,
    mode: Mode,
    item_conditions: Vec<ItemCondition>,
    location_conditions: Vec<LocationCondition>,
    supply_type_conditions: Vec<SupplyTypeCondition>,
    inventory_protection: InventoryProtection,
    commerce_characteristic: CommerceCharacteristic,
}

/// Intermediate builder passed to the item-rule definition closure.
#[derive(Debug, Default)]
pub struct ItemRuleBuilder {
    category: Vec<String>,
    product_type: Vec<String>,
    sku_pattern: Option<String>,
    status: Vec<String>,
    priority: Option<u32>,
}

/// Intermediate builder passed to the location-rule definition closure.
#[derive(Debug, Default)]
pub struct LocationRuleBuilder {
    stores: Vec<String>,
    regions: Vec<String>,
    zones: Vec<String>,
    warehouses: Vec<String>,
    priority: Option<u32>,
}

/// Intermediate builder passed to the supply-rule definition closure.
#[derive(Debug, Default)]
pub struct SupplyRuleBuilder {
    lead_time: u32,
    priority: Option<u32>,
}

fn collect(items: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    items.into_iter().map(Into::into).collect()
}

impl ItemRuleBuilder {
    #[must_use]
    pub fn categories(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.category = collect(values);
        self
    }

    #[must_use]
    pub fn product_types(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.product_type = collect(values);
        self
    }

    /// Substring pattern tested against the context SKU, case-sensitive.
    #[must_use]
    pub fn sku_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.sku_pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn statuses(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.status = collect(values);
        self
    }

    /// Override the positional priority for this condition.
    #[must_use]
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl LocationRuleBuilder {
    #[must_use]
    pub fn stores(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.stores = collect(values);
        self
    }

    #[must_use]
    pub fn regions(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.regions = collect(values);
        self
    }

    #[must_use]
    pub fn zones(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.zones = collect(values);
        self
    }

    #[must_use]
    pub fn warehouses(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.warehouses = collect(values);
        self
    }

    /// Override the positional priority for this condition.
    #[must_use]
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl SupplyRuleBuilder {
    /// Lead time in days.
    #[must_use]
    pub fn lead_time(mut self, days: u32) -> Self {
        self.lead_time = days;
        self
    }

    /// Override the positional priority for this condition.
    #[must_use]
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl ConfigBuilder {
    fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: 1,
            status: ConfigStatus::Draft,
            mode: Mode::Inclusion,
            item_conditions: Vec::new(),
            location_conditions: Vec::new(),
            supply_type_conditions: Vec::new(),
            inventory_protection: InventoryProtection::default(),
            commerce_characteristic: CommerceCharacteristic::default(),
        }
    }

    #[must_use]
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn status(mut self, status: ConfigStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Define an item condition. A closure that returns the builder
    /// unchanged produces a catch-all (every facet wildcarded).
    #[must_use]
    pub fn item_rule(
        mut self,
        id: &str,
        f: impl FnOnce(ItemRuleBuilder) -> ItemRuleBuilder,
    ) -> Self {
        let b = f(ItemRuleBuilder::default());
        let priority = b
            .priority
            .unwrap_or_else(|| next_priority(self.item_conditions.len()));
        self.item_conditions.push(ItemCondition {
            id: id.to_owned(),
            priority,
            category: b.category,
            product_type: b.product_type,
            sku_pattern: b.sku_pattern,
            status: b.status,
        });
        self
    }

    /// Define a location condition.
    #[must_use]
    pub fn location_rule(
        mut self,
        id: &str,
        f: impl FnOnce(LocationRuleBuilder) -> LocationRuleBuilder,
    ) -> Self {
        let b = f(LocationRuleBuilder::default());
        let priority = b
            .priority
            .unwrap_or_else(|| next_priority(self.location_conditions.len()));
        self.location_conditions.push(LocationCondition {
            id: id.to_owned(),
            priority,
            stores: b.stores,
            regions: b.regions,
            zones: b.zones,
            warehouses: b.warehouses,
        });
        self
    }

    /// Define a supply-type condition for the given source.
    #[must_use]
    pub fn supply_rule(
        mut self,
        id: &str,
        source: SupplySource,
        f: impl FnOnce(SupplyRuleBuilder) -> SupplyRuleBuilder,
    ) -> Self {
        let b = f(SupplyRuleBuilder::default());
        let priority = b
            .priority
            .unwrap_or_else(|| next_priority(self.supply_type_conditions.len()));
        self.supply_type_conditions.push(SupplyTypeCondition {
            id: id.to_owned(),
            priority,
            source,
            lead_time: b.lead_time,
        });
        self
    }

    #[must_use]
    pub fn inventory_protection(mut self, protection: InventoryProtection) -> Self {
        self.inventory_protection = protection;
        self
    }

    #[must_use]
    pub fn commerce_characteristic(mut self, commerce: CommerceCharacteristic) -> Self {
        self.commerce_characteristic = commerce;
        self
    }

    /// Validate and assemble the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on duplicate condition ids, an allocation
    /// percentage outside `0..=100`, or non-positive auto-release hours.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let mut seen = HashSet::new();
        let all_ids = self
            .item_conditions
            .iter()
            .map(|c| c.id.as_str())
            .chain(self.location_conditions.iter().map(|c| c.id.as_str()))
            .chain(self.supply_type_conditions.iter().map(|c| c.id.as_str()));
        for id in all_ids {
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateConditionId { id: id.to_owned() });
            }
        }

        for rule in &self.commerce_characteristic.channel_rules {
            if !(0.0..=100.0).contains(&rule.allocation_percentage) {
                return Err(ConfigError::AllocationOutOfRange {
                    channel: rule.channel.clone(),
                    value: rule.allocation_percentage,
                });
            }
        }

        if let Some(reserved) = &self.inventory_protection.reserved_inventory_config {
            if reserved.auto_release_hours <= 0.0 {
                return Err(ConfigError::NonPositiveAutoRelease {
                    hours: reserved.auto_release_hours,
                });
            }
        }

        Ok(Configuration {
            id: self.id,
            name: self.name,
            version: self.version,
            status: self.status,
            mode: self.mode,
            item_conditions: self.item_conditions,
            location_conditions: self.location_conditions,
            supply_type_conditions: self.supply_type_conditions,
            inventory_protection: self.inventory_protection,
            commerce_characteristic: self.commerce_characteristic,
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn next_priority(len: usize) -> u32 {
    len as u32 + 1
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Configuration('{}' v{}, {:?} mode, {} item / {} location / {} supply rules)",
            self.name,
            self.version,
            self.mode,
            self.item_conditions.len(),
            self.location_conditions.len(),
            self.supply_type_conditions.len(),
        )
    }
}
