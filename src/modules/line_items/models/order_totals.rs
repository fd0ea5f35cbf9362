use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{round_currency, round_percent};

/// Computed amounts and margins for one line item
///
/// Never stored on the item; recomputed on every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub product_total: Decimal,
    pub decoration_total: Decimal,
    pub charges_total: Decimal,
    pub total: Decimal,
    pub product_cost_total: Decimal,
    pub product_margin_percent: Decimal,
    pub total_margin_percent: Decimal,
    /// Purchase packs to order from the factory
    pub factory_quantity: u32,
}

impl OrderTotals {
    /// Display/persistence form: amounts and percentages at 2 decimals
    pub fn rounded(&self) -> Self {
        Self {
            product_total: round_currency(self.product_total),
            decoration_total: round_currency(self.decoration_total),
            charges_total: round_currency(self.charges_total),
            total: round_currency(self.total),
            product_cost_total: round_currency(self.product_cost_total),
            product_margin_percent: round_percent(self.product_margin_percent),
            total_margin_percent: round_percent(self.total_margin_percent),
            factory_quantity: self.factory_quantity,
        }
    }
}

/// Order-level roll-up of line item totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub item_count: usize,
    pub total_quantity: u64,
    pub product_total: Decimal,
    pub decoration_total: Decimal,
    pub charges_total: Decimal,
    pub total: Decimal,
    pub product_cost_total: Decimal,
    pub product_margin_percent: Decimal,
    pub total_margin_percent: Decimal,
}
