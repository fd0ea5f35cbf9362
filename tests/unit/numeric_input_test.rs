// Property-based tests for the numeric input boundary
//
// Properties tested:
// 1. arbitrary text never panics and malformed text coerces to 0
// 2. well-formed decimals parse exactly
// 3. quantities round to the nearest whole unit
// 4. percentages are stored at 2 decimals

use promo_pricing::core::numeric::{
    parse_decimal, parse_percent, parse_quantity, try_parse_decimal,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

proptest! {
    #[test]
    fn test_arbitrary_text_never_panics(input in "[0-9a-dA-D.,$% -]{0,24}") {
        let value = parse_decimal("unit_price", &input);
        if try_parse_decimal("unit_price", &input).is_err() {
            prop_assert_eq!(value, Decimal::ZERO);
        }
        let _ = parse_quantity("quantity", &input);
    }

    #[test]
    fn test_alphabetic_input_is_zero(input in "[a-zA-Z]{1,12}") {
        prop_assert_eq!(parse_decimal("cost", &input), Decimal::ZERO);
    }

    #[test]
    fn test_decimal_text_parses_exactly(cents in 0i64..=100_000_000) {
        let expected = Decimal::new(cents, 2);
        prop_assert_eq!(parse_decimal("cost", &expected.to_string()), expected);
    }

    #[test]
    fn test_quantity_rounds_to_nearest(whole in 0u32..=1_000_000, tenths in 0u32..=9) {
        let parsed = parse_quantity("quantity", &format!("{}.{}", whole, tenths));
        let expected = if tenths >= 5 { whole + 1 } else { whole };
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn test_percent_has_two_decimals(value in 0i64..=100_000_000, scale in 0u32..=6) {
        let input = Decimal::new(value, scale).to_string();
        let percent = parse_percent("decoration_percent", &input);
        prop_assert!(percent.scale() <= 2);
    }
}
