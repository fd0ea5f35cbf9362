// LineItem model
//
// A line item is one product line within an order: quantity, sell price,
// landed cost, decoration and charges percentages, optional pack size and
// the authoritative pricing mode. Values are immutable snapshots; every edit
// produces a new LineItem (see line_item_edit.rs).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::size_pricing::{PricingMode, SizePricing};
use crate::core::{money, PricingError, Result};
use crate::modules::line_items::services::SizeAggregator;

/// Represents a single product line in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque identifier, stable across edits
    pub id: String,

    /// External catalog product reference
    pub product_id: String,

    /// External catalog supplier reference
    pub supplier_id: String,

    /// Units ordered
    #[serde(default)]
    pub quantity: u32,

    /// Sell price per unit
    #[serde(default)]
    pub unit_price: Decimal,

    /// Landed cost per unit
    #[serde(default)]
    pub cost: Decimal,

    /// Decoration markup, as a percentage of the product total
    #[serde(default)]
    pub decoration_percent: Decimal,

    /// Surcharge, as a percentage of product + decoration
    #[serde(default)]
    pub charges_percent: Decimal,

    /// Units per purchase pack
    #[serde(default)]
    pub uom_factor: Option<u32>,

    #[serde(default)]
    pub pricing: PricingMode,

    /// Last persisted total for this line
    #[serde(default)]
    pub total_price: Option<Decimal>,
}

impl LineItem {
    /// Create a new simple-priced line item with validation
    ///
    /// # Arguments
    /// * `product_id` - Catalog product reference (must not be blank)
    /// * `supplier_id` - Catalog supplier reference (must not be blank)
    /// * `quantity` - Units ordered
    /// * `unit_price` - Must be non-negative
    /// * `cost` - Must be non-negative
    pub fn new(
        product_id: impl Into<String>,
        supplier_id: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
        cost: Decimal,
    ) -> Result<Self> {
        let item = Self {
            id: Uuid::new_v4().to_string(),
            product_id: product_id.into(),
            supplier_id: supplier_id.into(),
            quantity,
            unit_price,
            cost,
            decoration_percent: Decimal::ZERO,
            charges_percent: Decimal::ZERO,
            uom_factor: None,
            pricing: PricingMode::Simple,
            total_price: None,
        };

        item.validate()?;

        Ok(item)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_decoration_percent(mut self, percent: Decimal) -> Self {
        self.decoration_percent = money::round_percent(percent);
        self
    }

    pub fn with_charges_percent(mut self, percent: Decimal) -> Self {
        self.charges_percent = money::round_percent(percent);
        self
    }

    /// Set the pack size; zero means no pack grouping
    pub fn with_uom_factor(mut self, factor: u32) -> Self {
        self.uom_factor = (factor > 0).then_some(factor);
        self
    }

    pub fn with_total_price(mut self, total_price: Decimal) -> Self {
        self.total_price = Some(total_price);
        self
    }

    /// Switch to size-based pricing and derive quantity, price and cost
    pub fn with_size_pricing(mut self, sizes: SizePricing) -> Self {
        self.pricing = PricingMode::BySize(sizes);
        self.sync_size_aggregate();
        self
    }

    pub fn is_size_priced(&self) -> bool {
        self.pricing.is_size_based()
    }

    /// Recompute the derived quantity/unit price/cost from the size table
    ///
    /// No-op for simple-priced items.
    pub(crate) fn sync_size_aggregate(&mut self) {
        if let Some(sizes) = self.pricing.size_table() {
            let aggregate = SizeAggregator::aggregate(sizes);
            self.quantity = aggregate.quantity;
            self.unit_price = aggregate.unit_price;
            self.cost = aggregate.cost;
        }
    }

    /// Re-derive size-priced aggregates, e.g. after loading from the store
    ///
    /// Stored `quantity`/`unit_price`/`cost` of a size-priced item are not
    /// trusted; the size table is authoritative.
    pub fn normalized(mut self) -> Self {
        self.sync_size_aggregate();
        self
    }

    /// Validate identifiers, amounts and pack size
    pub fn validate(&self) -> Result<()> {
        Self::validate_reference("Product", &self.product_id)?;
        Self::validate_reference("Supplier", &self.supplier_id)?;

        self.validate_amounts()
    }

    /// Validate prices, costs and pack size, including every size bucket
    pub fn validate_amounts(&self) -> Result<()> {
        money::validate_amount("Unit price", self.unit_price).map_err(PricingError::Validation)?;
        money::validate_amount("Cost", self.cost).map_err(PricingError::Validation)?;

        if self.uom_factor == Some(0) {
            return Err(PricingError::validation("UOM factor must be positive"));
        }

        if let Some(sizes) = self.pricing.size_table() {
            for (size, bucket) in sizes {
                money::validate_amount(&format!("Size {} price", size), bucket.price)
                    .map_err(PricingError::Validation)?;
                money::validate_amount(&format!("Size {} cost", size), bucket.cost)
                    .map_err(PricingError::Validation)?;
            }
        }

        Ok(())
    }

    fn validate_reference(label: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(PricingError::validation(format!(
                "{} reference cannot be empty",
                label
            )));
        }

        Ok(())
    }
}
