use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{percent_to_rate, round_currency, round_percent, HUNDRED};
use crate::core::{PricingError, Result};

/// Inverts margin formulas into unit prices
///
/// Margins are accepted as given (negative or above typical ranges) except
/// where the inversion has no valid price: a margin of 100% or more, a
/// non-positive cost, or a back-solved price that is not positive.
pub struct MarginSolver;

impl MarginSolver {
    /// Solve `margin = (price - cost) / price` for price
    ///
    /// Formula: price = cost / (1 - margin / 100), rounded to the cent (half-up).
    pub fn price_from_product_margin(cost: Decimal, margin_percent: Decimal) -> Result<Decimal> {
        let margin = round_percent(margin_percent);

        if margin >= HUNDRED {
            return Err(PricingError::unsolvable(format!(
                "product margin {}% must be below 100%",
                margin
            )));
        }

        if cost <= Decimal::ZERO {
            return Err(PricingError::unsolvable(format!(
                "cost {} must be positive to derive a price",
                cost
            )));
        }

        let price = cost
            .checked_div(Decimal::ONE - percent_to_rate(margin))
            .ok_or_else(|| PricingError::unsolvable("price exceeds representable range"))?;

        Ok(round_currency(price))
    }

    /// Solve the total margin for a unit price
    ///
    /// Decoration and charges amounts are per unit and count as cost:
    ///
    /// ```text
    /// total_cost      = cost + decoration_amount + charges_amount
    /// new_total_price = total_cost / (1 - margin / 100)
    /// unit_price      = new_total_price - decoration_amount - charges_amount
    /// ```
    pub fn price_from_total_margin(
        cost: Decimal,
        decoration_amount: Decimal,
        charges_amount: Decimal,
        margin_percent: Decimal,
    ) -> Result<Decimal> {
        let margin = round_percent(margin_percent);

        if margin >= HUNDRED {
            return Err(PricingError::unsolvable(format!(
                "total margin {}% must be below 100%",
                margin
            )));
        }

        let unit_price = cost
            .checked_add(decoration_amount)
            .and_then(|c| c.checked_add(charges_amount))
            .and_then(|total_cost| total_cost.checked_div(Decimal::ONE - percent_to_rate(margin)))
            .and_then(|total_price| total_price.checked_sub(decoration_amount))
            .and_then(|p| p.checked_sub(charges_amount))
            .map(round_currency)
            .ok_or_else(|| PricingError::unsolvable("price exceeds representable range"))?;

        if unit_price <= Decimal::ZERO {
            return Err(PricingError::unsolvable(format!(
                "total margin {}% back-solves to non-positive unit price {}",
                margin, unit_price
            )));
        }

        Ok(unit_price)
    }

    /// Forward margin: (price - cost) / price × 100, 0 when price is 0
    ///
    /// Unrounded; round for display with `money::round_percent`.
    pub fn margin_from_price(price: Decimal, cost: Decimal) -> Decimal {
        if price.is_zero() {
            return Decimal::ZERO;
        }

        price
            .checked_sub(cost)
            .and_then(|profit| profit.checked_div(price))
            .and_then(|ratio| ratio.checked_mul(HUNDRED))
            .unwrap_or_default()
    }

    /// Product margin edit: new price, or `previous_price` when unsolvable
    pub fn apply_product_margin(
        previous_price: Decimal,
        cost: Decimal,
        margin_percent: Decimal,
    ) -> Decimal {
        Self::price_from_product_margin(cost, margin_percent)
            .unwrap_or_else(|err| keep_previous(previous_price, err))
    }

    /// Total margin edit: new price, or `previous_price` when unsolvable
    pub fn apply_total_margin(
        previous_price: Decimal,
        cost: Decimal,
        decoration_amount: Decimal,
        charges_amount: Decimal,
        margin_percent: Decimal,
    ) -> Decimal {
        Self::price_from_total_margin(cost, decoration_amount, charges_amount, margin_percent)
            .unwrap_or_else(|err| keep_previous(previous_price, err))
    }
}

fn keep_previous(previous_price: Decimal, err: PricingError) -> Decimal {
    debug!("{}; keeping unit price {}", err, previous_price);
    previous_price
}
