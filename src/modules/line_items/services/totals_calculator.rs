use rust_decimal::Decimal;
use tracing::warn;

use crate::core::money::{percent_to_rate, HUNDRED};
use crate::core::{PricingError, Result};
use crate::modules::line_items::models::{LineItem, OrderSummary, OrderTotals};

/// Computes amounts and margins for line items
///
/// Charges compound on top of decoration: they apply to product + decoration,
/// not to the product total alone. Decoration and charges are counted as
/// cost-equivalent in the total margin, so they carry zero margin of their own.
pub struct TotalsCalculator;

impl TotalsCalculator {
    /// Compute totals for a line item
    ///
    /// Total function: an arithmetic overflow degrades to all-zero totals
    /// instead of failing.
    pub fn compute_totals(item: &LineItem) -> OrderTotals {
        Self::try_compute_totals(item).unwrap_or_else(|err| {
            warn!("Line item {} totals degraded to zero: {}", item.id, err);
            OrderTotals::default()
        })
    }

    /// Checked variant of [`compute_totals`](Self::compute_totals)
    ///
    /// ```text
    /// product_total      = quantity × unit_price
    /// decoration_total   = decoration% × product_total
    /// charges_total      = charges% × (product_total + decoration_total)
    /// total              = product_total + decoration_total + charges_total
    /// product_cost_total = cost × quantity
    /// ```
    pub fn try_compute_totals(item: &LineItem) -> Result<OrderTotals> {
        let quantity = Decimal::from(item.quantity);

        let product_total = checked(quantity.checked_mul(item.unit_price), "product_total")?;
        let decoration_total = checked(
            percent_to_rate(item.decoration_percent).checked_mul(product_total),
            "decoration_total",
        )?;
        let subtotal_after_decoration = checked(
            product_total.checked_add(decoration_total),
            "subtotal_after_decoration",
        )?;
        let charges_total = checked(
            percent_to_rate(item.charges_percent).checked_mul(subtotal_after_decoration),
            "charges_total",
        )?;
        let total = checked(subtotal_after_decoration.checked_add(charges_total), "total")?;

        let product_cost_total = checked(item.cost.checked_mul(quantity), "product_cost_total")?;
        let total_cost = checked(
            product_cost_total
                .checked_add(decoration_total)
                .and_then(|c| c.checked_add(charges_total)),
            "total_cost",
        )?;

        Ok(OrderTotals {
            product_total,
            decoration_total,
            charges_total,
            total,
            product_cost_total,
            product_margin_percent: margin_percent(product_total, product_cost_total)?,
            total_margin_percent: margin_percent(total, total_cost)?,
            factory_quantity: Self::factory_quantity(item.quantity, item.uom_factor),
        })
    }

    /// Purchase packs needed: ceil(quantity / factor), or quantity without a factor
    pub fn factory_quantity(quantity: u32, uom_factor: Option<u32>) -> u32 {
        match uom_factor {
            Some(factor) if factor > 0 => quantity.div_ceil(factor),
            _ => quantity,
        }
    }

    /// Roll line item totals up to order level
    ///
    /// Order margins use the same formulas over the summed amounts.
    pub fn summarize<'a, I>(items: I) -> OrderSummary
    where
        I: IntoIterator<Item = &'a LineItem>,
    {
        let mut summary = OrderSummary::default();

        for item in items {
            let totals = Self::compute_totals(item);
            summary.item_count += 1;
            summary.total_quantity += u64::from(item.quantity);
            summary.product_total = summary.product_total.saturating_add(totals.product_total);
            summary.decoration_total =
                summary.decoration_total.saturating_add(totals.decoration_total);
            summary.charges_total = summary.charges_total.saturating_add(totals.charges_total);
            summary.total = summary.total.saturating_add(totals.total);
            summary.product_cost_total =
                summary.product_cost_total.saturating_add(totals.product_cost_total);
        }

        let total_cost = summary
            .product_cost_total
            .saturating_add(summary.decoration_total)
            .saturating_add(summary.charges_total);
        summary.product_margin_percent =
            margin_percent(summary.product_total, summary.product_cost_total).unwrap_or_default();
        summary.total_margin_percent =
            margin_percent(summary.total, total_cost).unwrap_or_default();

        summary
    }
}

fn checked(value: Option<Decimal>, what: &str) -> Result<Decimal> {
    value.ok_or_else(|| PricingError::arithmetic(what))
}

/// (revenue - cost) / revenue × 100, or 0 when revenue is not positive
fn margin_percent(revenue: Decimal, cost: Decimal) -> Result<Decimal> {
    if revenue <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    checked(
        revenue
            .checked_sub(cost)
            .and_then(|profit| profit.checked_div(revenue))
            .and_then(|ratio| ratio.checked_mul(HUNDRED)),
        "margin_percent",
    )
}
