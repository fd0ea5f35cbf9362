// Tests for per-size price/quantity aggregation
//
// Properties tested:
// 1. aggregate quantity is the sum of bucket quantities
// 2. weighted price and cost stay within the bucket min/max
// 3. size bucket edits keep the item's derived fields coherent
// 4. stored items are re-derived from their size table

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::TestDataFactory;
use promo_pricing::core::EditField;
use promo_pricing::line_items::{
    LineItem, LineItemEdit, SizeAggregator, SizeBucket, SizePricing, TotalsCalculator,
};
use promo_pricing::PricingError;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn bucket_strategy() -> impl Strategy<Value = SizeBucket> {
    (0i64..=5_000, 0i64..=10_000, 0u32..=500).prop_map(|(cost, price, quantity)| {
        SizeBucket::new(Decimal::new(cost, 2), Decimal::new(price, 2), quantity)
    })
}

fn table_strategy() -> impl Strategy<Value = SizePricing> {
    prop::collection::btree_map(
        prop::sample::select(vec!["XS", "S", "M", "L", "XL", "2XL", "3XL"])
            .prop_map(str::to_string),
        bucket_strategy(),
        1..4,
    )
}

proptest! {
    #[test]
    fn test_aggregate_quantity_is_sum(table in table_strategy()) {
        let aggregate = SizeAggregator::aggregate(&table);
        let expected: u32 = table.values().map(|b| b.quantity).sum();

        prop_assert_eq!(aggregate.quantity, expected);
    }

    #[test]
    fn test_weighted_average_is_bounded(table in table_strategy()) {
        let aggregate = SizeAggregator::aggregate(&table);
        let weighted: Vec<&SizeBucket> = table.values().filter(|b| b.quantity > 0).collect();

        if weighted.is_empty() {
            prop_assert_eq!(aggregate.unit_price, Decimal::ZERO);
            prop_assert_eq!(aggregate.cost, Decimal::ZERO);
        } else {
            let min_price = weighted.iter().map(|b| b.price).min().unwrap();
            let max_price = weighted.iter().map(|b| b.price).max().unwrap();
            let min_cost = weighted.iter().map(|b| b.cost).min().unwrap();
            let max_cost = weighted.iter().map(|b| b.cost).max().unwrap();

            prop_assert!(aggregate.unit_price >= min_price && aggregate.unit_price <= max_price);
            prop_assert!(aggregate.cost >= min_cost && aggregate.cost <= max_cost);
        }
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_weighting_example() {
        let table = TestDataFactory::sizes(&[
            ("S", dec!(5), dec!(10), 2),
            ("M", dec!(6), dec!(12), 8),
        ]);

        let aggregate = SizeAggregator::aggregate(&table);

        assert_eq!(aggregate.quantity, 10);
        assert_eq!(aggregate.unit_price, dec!(11.6));
        assert_eq!(aggregate.cost, dec!(5.8));
    }

    #[test]
    fn test_each_bucket_edit_reaggregates() {
        let item = TestDataFactory::apparel_item("tee");

        let item = item
            .with_edit(&LineItemEdit::SizePrice {
                size: "S".to_string(),
                price: dec!(11),
            })
            .unwrap();
        // (11*2 + 12*8) / 10
        assert_eq!(item.unit_price, dec!(11.8));

        let item = item
            .with_edit(&LineItemEdit::SizeCost {
                size: "M".to_string(),
                cost: dec!(7),
            })
            .unwrap();
        // (5*2 + 7*8) / 10
        assert_eq!(item.cost, dec!(6.6));

        let item = item
            .with_edit(&LineItemEdit::from_input(
                EditField::SizeQuantity("L".to_string()),
                "10",
            ))
            .unwrap();
        assert_eq!(item.quantity, 20);

        let totals = TotalsCalculator::compute_totals(&item);
        // 11*2 + 12*8 + 0*10
        assert_eq!(totals.product_total, dec!(118));
    }

    #[test]
    fn test_derived_fields_cannot_be_edited() {
        let item = TestDataFactory::apparel_item("tee");

        for edit in [
            LineItemEdit::Quantity(5),
            LineItemEdit::UnitPrice(dec!(1)),
            LineItemEdit::Cost(dec!(1)),
            LineItemEdit::ProductMargin(dec!(40)),
            LineItemEdit::TotalMargin(dec!(40)),
        ] {
            let result = item.with_edit(&edit);
            assert!(
                matches!(result, Err(PricingError::DerivedField(_))),
                "{:?} should be rejected",
                edit
            );
        }

        // Percentages stay editable
        let decorated = item
            .with_edit(&LineItemEdit::DecorationPercent(dec!(15)))
            .unwrap();
        assert_eq!(decorated.decoration_percent, dec!(15));
    }

    fn stored_tee() -> LineItem {
        serde_json::from_value(serde_json::json!({
            "id": "tee-1",
            "product_id": "PC61",
            "supplier_id": "SanMar",
            "pricing": {
                "mode": "by_size",
                "sizes": {"S": {"cost": "5", "price": "10", "quantity": 2}}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_stored_item_is_rederived_on_normalize() {
        let item = stored_tee().normalized();

        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, dec!(10));
        assert_eq!(item.cost, dec!(5));
        assert_eq!(TotalsCalculator::compute_totals(&item).total, dec!(20));
    }

    #[test]
    fn test_percent_edit_on_stored_item_keeps_size_totals() {
        let edited = stored_tee()
            .with_edit(&LineItemEdit::DecorationPercent(dec!(10)))
            .unwrap();

        // 10 × 2 = 20, +10% decoration
        assert_eq!(edited.quantity, 2);
        assert_eq!(TotalsCalculator::compute_totals(&edited).total, dec!(22));
    }

    #[test]
    fn test_negative_bucket_values_are_rejected() {
        let item = TestDataFactory::apparel_item("tee");

        let result = item.with_edit(&LineItemEdit::from_input(
            EditField::SizePrice("M".to_string()),
            "-12",
        ));

        assert!(matches!(result, Err(PricingError::Validation(_))));
        assert_eq!(item.unit_price, dec!(11.6));
    }
}
