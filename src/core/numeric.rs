// Numeric coercion boundary
//
// Every text or float value entering the engine passes through here, so the
// calculators only ever see well-typed decimals. Unparseable input becomes 0
// (InvalidNumericInput policy) and is logged at debug level.

use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::error::{PricingError, Result};
use super::money::round_percent;

/// Parse a decimal from user text, reporting malformed input
///
/// Accepts surrounding whitespace, a leading `$`, thousands separators and a
/// trailing `%`. Blank input is read as zero.
pub fn try_parse_decimal(field: &str, input: &str) -> Result<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| PricingError::InvalidNumericInput {
            field: field.to_string(),
            input: input.to_string(),
        })
}

/// Parse a decimal from user text, substituting 0 for malformed input
pub fn parse_decimal(field: &str, input: &str) -> Decimal {
    try_parse_decimal(field, input).unwrap_or_else(|err| {
        debug!("{}; substituting 0", err);
        Decimal::ZERO
    })
}

/// Parse a percentage, rounded to 2 decimal places before storage
pub fn parse_percent(field: &str, input: &str) -> Decimal {
    round_percent(parse_decimal(field, input))
}

/// Parse a quantity, rounding non-integer input to the nearest whole unit
///
/// Negative or out-of-range values coerce to 0.
pub fn parse_quantity(field: &str, input: &str) -> u32 {
    let value = parse_decimal(field, input)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    if value < Decimal::ZERO {
        debug!("Negative {} {:?}; substituting 0", field, input);
        return 0;
    }

    value.to_u32().unwrap_or_else(|| {
        debug!("{} {:?} out of range; substituting 0", field, input);
        0
    })
}

/// Parse a UOM factor; zero or malformed input means no pack grouping
pub fn parse_uom_factor(input: &str) -> Option<u32> {
    match parse_quantity("uom_factor", input) {
        0 => None,
        factor => Some(factor),
    }
}

/// Convert a float (e.g. from a JSON number) into a decimal, NaN/∞ → 0
pub fn decimal_from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        debug!("Non-finite numeric value {}; substituting 0", value);
        Decimal::ZERO
    })
}
