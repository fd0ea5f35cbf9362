use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::round_currency;
use crate::core::{PricingError, Result};
use crate::modules::line_items::models::{LineItem, PricingMode, SizePricing};

/// Line item record sent to the order-update endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistableItem {
    pub id: String,
    pub product_id: String,
    pub supplier_id: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub cost: Decimal,
    pub decoration_percent: Decimal,
    pub charges_percent: Decimal,
    pub uom_factor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_pricing: Option<SizePricing>,
    pub total_price: Decimal,
}

impl PersistableItem {
    /// Snapshot an item for persistence, amounts rounded to the cent
    pub fn from_line_item(item: &LineItem, total_price: Decimal) -> Self {
        let size_pricing = match &item.pricing {
            PricingMode::BySize(sizes) => Some(sizes.clone()),
            PricingMode::Simple => None,
        };

        Self {
            id: item.id.clone(),
            product_id: item.product_id.clone(),
            supplier_id: item.supplier_id.clone(),
            quantity: item.quantity,
            unit_price: round_currency(item.unit_price),
            cost: round_currency(item.cost),
            decoration_percent: item.decoration_percent,
            charges_percent: item.charges_percent,
            uom_factor: item.uom_factor,
            size_pricing,
            total_price: round_currency(total_price),
        }
    }

    /// The line item as it stands after a successful save
    ///
    /// Size-priced items get their aggregates re-derived from the size table.
    pub fn into_line_item(self) -> LineItem {
        let item = LineItem {
            id: self.id,
            product_id: self.product_id,
            supplier_id: self.supplier_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            cost: self.cost,
            decoration_percent: self.decoration_percent,
            charges_percent: self.charges_percent,
            uom_factor: self.uom_factor,
            pricing: self
                .size_pricing
                .map(PricingMode::BySize)
                .unwrap_or_default(),
            total_price: Some(self.total_price),
        };

        item.normalized()
    }
}

/// Order-level payload: `{items, subtotal, total}`
///
/// `total` equals `subtotal`; tax and shipping are composed elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub items: Vec<PersistableItem>,
    pub subtotal: Decimal,
    pub total: Decimal,
}

impl OrderUpdate {
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(PricingError::from)
    }
}

/// Result of reconciling edits against an order's items
#[derive(Debug, Default)]
pub struct Reconciliation {
    pub update: OrderUpdate,
    /// Items recomputed from the edit session
    pub recomputed: usize,
    /// Items whose recomputation failed and were persisted with a zero total
    pub degraded: Vec<PricingError>,
}

impl Reconciliation {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}
