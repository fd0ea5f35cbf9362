// Property-based tests for margin inversion
//
// Properties tested:
// 1. margin → price → margin round-trips within 0.01 percentage points
// 2. solved prices are cent-precision and never below cost for non-negative margins
// 3. unsolvable targets (margin >= 100, cost <= 0) keep the previous price

use promo_pricing::margins::MarginSolver;
use promo_pricing::PricingError;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tolerance() -> Decimal {
    dec!(0.01)
}

proptest! {
    /// Property: forward margin of the solved price matches the target
    ///
    /// Cent rounding of the price moves the margin by at most
    /// 0.5 / cost percentage points, so costs start at 100.00.
    #[test]
    fn test_product_margin_round_trip(
        cost_cents in 10_000i64..=10_000_000,
        margin_hundredths in 0i64..=9_900,
    ) {
        let cost = Decimal::new(cost_cents, 2);
        let margin = Decimal::new(margin_hundredths, 2);

        let price = MarginSolver::price_from_product_margin(cost, margin).unwrap();
        let realized = MarginSolver::margin_from_price(price, cost);

        prop_assert!(
            (realized - margin).abs() <= tolerance(),
            "cost={}, margin={}, price={}, realized={}", cost, margin, price, realized
        );
    }

    /// Property: prices are rounded to the cent and cover cost
    #[test]
    fn test_solved_price_is_cent_precision(
        cost_cents in 1i64..=10_000_000,
        margin_hundredths in 0i64..=9_999,
    ) {
        let cost = Decimal::new(cost_cents, 2);
        let margin = Decimal::new(margin_hundredths, 2);

        let price = MarginSolver::price_from_product_margin(cost, margin).unwrap();

        prop_assert_eq!(price, price.round_dp(2));
        prop_assert!(price >= cost);
    }

    /// Property: total margin solution reproduces the target over total cost
    #[test]
    fn test_total_margin_round_trip(
        cost_cents in 10_000i64..=1_000_000,
        decoration_cents in 0i64..=100_000,
        charges_cents in 0i64..=100_000,
        margin_hundredths in 0i64..=9_000,
    ) {
        let cost = Decimal::new(cost_cents, 2);
        let decoration = Decimal::new(decoration_cents, 2);
        let charges = Decimal::new(charges_cents, 2);
        let margin = Decimal::new(margin_hundredths, 2);

        let unit_price =
            MarginSolver::price_from_total_margin(cost, decoration, charges, margin).unwrap();
        let total_price = unit_price + decoration + charges;
        let realized = MarginSolver::margin_from_price(total_price, cost + decoration + charges);

        prop_assert!(
            (realized - margin).abs() <= tolerance(),
            "unit_price={}, realized={}, target={}", unit_price, realized, margin
        );
    }

    /// Property: any margin at or above 100% keeps the previous price
    #[test]
    fn test_unsolvable_margin_keeps_previous_price(
        cost_cents in 0i64..=1_000_000,
        margin_hundredths in 10_000i64..=1_000_000,
        previous_cents in 0i64..=1_000_000,
    ) {
        let previous = Decimal::new(previous_cents, 2);
        let price = MarginSolver::apply_product_margin(
            previous,
            Decimal::new(cost_cents, 2),
            Decimal::new(margin_hundredths, 2),
        );

        prop_assert_eq!(price, previous);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_margin_of_one_hundred_is_unsolvable() {
        let result = MarginSolver::price_from_product_margin(dec!(10), dec!(100));
        assert!(matches!(result, Err(PricingError::MarginUnsolvable(_))));

        assert_eq!(
            MarginSolver::apply_product_margin(dec!(14.99), dec!(10), dec!(100)),
            dec!(14.99)
        );
    }

    #[test]
    fn test_zero_cost_is_unsolvable() {
        assert_eq!(
            MarginSolver::apply_product_margin(dec!(3.50), dec!(0), dec!(35)),
            dec!(3.50)
        );
    }

    #[test]
    fn test_margin_input_is_rounded_before_solving() {
        // 39.996 rounds to 40.00
        assert_eq!(
            MarginSolver::price_from_product_margin(dec!(6), dec!(39.996)).unwrap(),
            dec!(10.00)
        );
    }

    #[test]
    fn test_price_rounding_is_half_up() {
        // 0.09 / 0.4 = 0.225 → 0.23
        assert_eq!(
            MarginSolver::price_from_product_margin(dec!(0.09), dec!(60)).unwrap(),
            dec!(0.23)
        );
    }

    #[test]
    fn test_margin_from_zero_price() {
        assert_eq!(MarginSolver::margin_from_price(dec!(0), dec!(5)), Decimal::ZERO);
    }
}
