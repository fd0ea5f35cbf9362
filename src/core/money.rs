use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for every currency amount crossing the UI/persistence boundary
pub const CURRENCY_SCALE: u32 = 2;

/// Decimal places for stored and displayed percentages
pub const PERCENT_SCALE: u32 = 2;

/// One hundred, as used by every percentage formula
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Rounds a currency amount to cents, half-up
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to 2 decimal places, half-up
pub fn round_percent(percent: Decimal) -> Decimal {
    percent.round_dp_with_strategy(PERCENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a percentage (e.g. 12.5) into a rate (0.125)
pub fn percent_to_rate(percent: Decimal) -> Decimal {
    percent / HUNDRED
}

/// Validates that an amount is non-negative
pub fn validate_amount(label: &str, amount: Decimal) -> Result<(), String> {
    if amount < Decimal::ZERO {
        return Err(format!("{} must be non-negative, got: {}", label, amount));
    }

    Ok(())
}

/// Formats a currency amount for display, e.g. `1234.50`
pub fn format_currency(amount: Decimal) -> String {
    format!("{:.width$}", round_currency(amount), width = CURRENCY_SCALE as usize)
}

/// Formats a percentage for display, e.g. `12.50%`
pub fn format_percent(percent: Decimal) -> String {
    format!("{:.width$}%", round_percent(percent), width = PERCENT_SCALE as usize)
}
