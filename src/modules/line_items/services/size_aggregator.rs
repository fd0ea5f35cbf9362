use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::modules::line_items::models::{SizeBucket, SizePricing};

/// Quantity-weighted blend of a size table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeAggregate {
    pub quantity: u32,
    pub unit_price: Decimal,
    pub cost: Decimal,
}

/// Collapses per-size pricing into a single unit cost/price/quantity
pub struct SizeAggregator;

impl SizeAggregator {
    /// Weighted averages across all size buckets
    ///
    /// ```text
    /// quantity   = Σ quantity[s]
    /// unit_price = Σ price[s] × quantity[s] / quantity
    /// cost       = Σ cost[s]  × quantity[s] / quantity
    /// ```
    ///
    /// An empty or zero-quantity table yields zero price and cost.
    pub fn aggregate(sizes: &SizePricing) -> SizeAggregate {
        let mut total_quantity: u64 = 0;
        let mut total_price_amount = Decimal::ZERO;
        let mut total_cost_amount = Decimal::ZERO;

        for (size, bucket) in sizes {
            let quantity = Decimal::from(bucket.quantity);
            let (Some(price_amount), Some(cost_amount)) = (
                bucket.price.checked_mul(quantity),
                bucket.cost.checked_mul(quantity),
            ) else {
                warn!("Size {} amounts overflow; aggregate degraded to zero", size);
                return SizeAggregate::default();
            };

            total_quantity += u64::from(bucket.quantity);
            total_price_amount = total_price_amount.saturating_add(price_amount);
            total_cost_amount = total_cost_amount.saturating_add(cost_amount);
        }

        if total_quantity == 0 {
            return SizeAggregate::default();
        }

        let divisor = Decimal::from(total_quantity);

        SizeAggregate {
            quantity: u32::try_from(total_quantity).unwrap_or(u32::MAX),
            unit_price: total_price_amount / divisor,
            cost: total_cost_amount / divisor,
        }
    }

    /// Bucket for a size label; missing sizes read as all zeros
    pub fn bucket(sizes: &SizePricing, size: &str) -> SizeBucket {
        sizes.get(size).cloned().unwrap_or_default()
    }
}
