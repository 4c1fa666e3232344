//! Leaf condition matchers.
//!
//! Each matcher is a pure function of one condition and the corresponding
//! context slice, returning the names of the sub-conditions (facets) that
//! passed rather than a single boolean, so callers can report partial
//! matches. Whether a facet list amounts to a whole-condition match is the
//! caller's decision, governed by the category's
//! [`MatchPolicy`](crate::MatchPolicy).
//!
//! Wildcard convention: an empty facet list (or absent SKU pattern) matches
//! anything, it never means "matches nothing".

use crate::types::{
    CommerceCharacteristic, CommerceContext, InventoryContext, InventoryProtection, ItemCondition,
    LocationCondition, LocationContext, ProductContext, SafetyStockMode, SupplySource,
    SupplyTypeCondition,
};

/// Facet count of an item condition; the item category gates on all of them.
pub(crate) const ITEM_FACETS: usize = 4;

/// Facet count of a location condition.
pub(crate) const LOCATION_FACETS: usize = 4;

/// Facet count of the inventory-protection block.
pub(crate) const PROTECTION_FACETS: usize = 3;

/// Facet count of the commerce characteristic.
pub(crate) const COMMERCE_FACETS: usize = 3;

/// Facet count of a supply-type condition.
pub(crate) const SUPPLY_FACETS: usize = 1;

fn wildcard_contains(values: &[String], needle: &str) -> bool {
    values.is_empty() || values.iter().any(|v| v == needle)
}

/// Facets of `condition` that the product satisfies.
pub(crate) fn item_facets(
    condition: &ItemCondition,
    product: &ProductContext,
) -> Vec<&'static str> {
    let mut met = Vec::with_capacity(ITEM_FACETS);

    if wildcard_contains(&condition.category, &product.category) {
        met.push("category");
    }
    if wildcard_contains(&condition.product_type, &product.product_type) {
        met.push("product_type");
    }
    // Substring containment, case-sensitive.
    let sku_ok = condition
        .sku_pattern
        .as_deref()
        .is_none_or(|pattern| product.sku.contains(pattern));
    if sku_ok {
        met.push("sku_pattern");
    }
    if wildcard_contains(&condition.status, &product.status) {
        met.push("status");
    }

    met
}

/// Facets of `condition` that the location satisfies. A facet needs its
/// context field to be present before the wildcard rule applies.
pub(crate) fn location_facets(
    condition: &LocationCondition,
    location: &LocationContext,
) -> Vec<&'static str> {
    let mut met = Vec::with_capacity(4);

    if let Some(store) = &location.store_id {
        if wildcard_contains(&condition.stores, store) {
            met.push("store");
        }
    }
    if let Some(region) = &location.region {
        if wildcard_contains(&condition.regions, region) {
            met.push("region");
        }
    }
    if let Some(zone) = &location.zone {
        if wildcard_contains(&condition.zones, zone) {
            met.push("zone");
        }
    }
    if let Some(warehouse) = &location.warehouse_id {
        if wildcard_contains(&condition.warehouses, warehouse) {
            met.push("warehouse");
        }
    }

    met
}

/// Safety stock in effect for the given on-hand quantity: the configured
/// override (absolute units, or a percentage of on-hand stock), falling back
/// to the flat `safety_stock` count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn effective_safety_stock(protection: &InventoryProtection, available_qty: u32) -> u32 {
    match &protection.safety_stock_settings {
        Some(settings) => match settings.mode {
            SafetyStockMode::Absolute => settings.value.max(0.0).round() as u32,
            SafetyStockMode::Percentage => {
                (f64::from(available_qty) * settings.value.max(0.0) / 100.0).round() as u32
            }
        },
        None => protection.safety_stock,
    }
}

/// Protection sub-checks the inventory slice passes. Only called when
/// protection is enabled and an inventory slice is present.
pub(crate) fn protection_facets(
    protection: &InventoryProtection,
    inventory: &InventoryContext,
) -> Vec<&'static str> {
    let mut met = Vec::with_capacity(3);

    if inventory.available_qty >= effective_safety_stock(protection, inventory.available_qty) {
        met.push("safety_stock");
    }
    if protection.reserved_inventory && inventory.reserved_qty > 0 {
        met.push("reserved_inventory");
    }
    if inventory.available_qty >= protection.protection_threshold {
        met.push("protection_threshold");
    }

    met
}

/// Commerce sub-checks the context passes. Only called when the commerce
/// characteristic is enabled and a commerce slice is present.
pub(crate) fn commerce_facets(
    commerce: &CommerceCharacteristic,
    context: &CommerceContext,
) -> Vec<&'static str> {
    let mut met = Vec::with_capacity(3);

    if wildcard_contains(&commerce.channels, &context.channel) {
        met.push("channel");
    }
    if wildcard_contains(&commerce.order_types, &context.order_type) {
        met.push("order_type");
    }
    if wildcard_contains(&commerce.customer_segments, &context.customer_segment) {
        met.push("customer_segment");
    }

    met
}

/// The single supply facet: exact source equality.
pub(crate) fn supply_facets(
    condition: &SupplyTypeCondition,
    supply: SupplySource,
) -> Vec<&'static str> {
    if condition.source == supply {
        vec!["type"]
    } else {
        Vec::new()
    }
}
