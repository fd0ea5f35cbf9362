use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-size cost/price/quantity for one garment size
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeBucket {
    #[serde(default)]
    pub cost: Decimal,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub quantity: u32,
}

impl SizeBucket {
    pub fn new(cost: Decimal, price: Decimal, quantity: u32) -> Self {
        Self {
            cost,
            price,
            quantity,
        }
    }
}

/// Size label (e.g. "S", "XL") to bucket, iterated in label order
pub type SizePricing = BTreeMap<String, SizeBucket>;

/// Which pricing inputs are authoritative for a line item
///
/// With a non-empty `BySize` table the item's quantity, unit price and cost
/// are weighted aggregates of the buckets and are never edited directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "sizes", rename_all = "snake_case")]
pub enum PricingMode {
    #[default]
    Simple,
    BySize(SizePricing),
}

impl PricingMode {
    /// The size table, only when it is non-empty and therefore authoritative
    pub fn size_table(&self) -> Option<&SizePricing> {
        match self {
            PricingMode::BySize(sizes) if !sizes.is_empty() => Some(sizes),
            _ => None,
        }
    }

    pub fn is_size_based(&self) -> bool {
        self.size_table().is_some()
    }
}
