use super::config::SupplySource;

/// Item attributes of the request being scored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductContext {
    pub sku: String,
    pub category: String,
    pub product_type: String,
    pub status: String,
}

/// Location attributes of the request being scored. Every field is optional;
/// a location facet with no context value never matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationContext {
    pub store_id: Option<String>,
    pub region: Option<String>,
    pub zone: Option<String>,
    pub warehouse_id: Option<String>,
}

/// On-hand and reserved quantities for the item at the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryContext {
    pub available_qty: u32,
    pub reserved_qty: u32,
}

/// Commerce characteristics of the request being scored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommerceContext {
    pub channel: String,
    pub order_type: String,
    pub customer_segment: String,
}

/// Per-call evaluation input. Never persisted.
///
/// Any absent slice disables the corresponding matcher category entirely:
/// the category has no opinion, it does not count as a failed match.
///
/// # Example
///
/// ```
/// use sellable::{EvaluationContext, InventoryContext};
///
/// let ctx = EvaluationContext::new()
///     .with_product("SKU1", "Grocery", "Snack", "Active")
///     .with_inventory(InventoryContext { available_qty: 80, reserved_qty: 5 });
/// assert!(ctx.location.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationContext {
    pub product: Option<ProductContext>,
    pub location: Option<LocationContext>,
    pub inventory: Option<InventoryContext>,
    pub commerce: Option<CommerceContext>,
    pub supply: Option<SupplySource>,
}

impl EvaluationContext {
    /// Create an empty context (every matcher category disabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_product(
        mut self,
        sku: impl Into<String>,
        category: impl Into<String>,
        product_type: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        self.product = Some(ProductContext {
            sku: sku.into(),
            category: category.into(),
            product_type: product_type.into(),
            status: status.into(),
        });
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: LocationContext) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn with_inventory(mut self, inventory: InventoryContext) -> Self {
        self.inventory = Some(inventory);
        self
    }

    #[must_use]
    pub fn with_commerce(
        mut self,
        channel: impl Into<String>,
        order_type: impl Into<String>,
        customer_segment: impl Into<String>,
    ) -> Self {
        self.commerce = Some(CommerceContext {
            channel: channel.into(),
            order_type: order_type.into(),
            customer_segment: customer_segment.into(),
        });
        self
    }

    #[must_use]
    pub fn with_supply(mut self, source: SupplySource) -> Self {
        self.supply = Some(source);
        self
    }
}
