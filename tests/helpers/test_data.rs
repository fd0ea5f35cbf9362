// Test Data Factory
//
// Builds line items and orders with fixed ids so assertions can address them.

use promo_pricing::line_items::{LineItem, SizeBucket, SizePricing};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Test data factory for line items and orders
pub struct TestDataFactory;

impl TestDataFactory {
    /// Simple-priced item with a known persisted total
    ///
    /// # Example
    /// ```ignore
    /// let item = TestDataFactory::simple_item("li-1", 10, dec!(10), dec!(5));
    /// assert_eq!(item.total_price, Some(dec!(100)));
    /// ```
    pub fn simple_item(id: &str, quantity: u32, unit_price: Decimal, cost: Decimal) -> LineItem {
        LineItem::new("PROD-TEST", "Gemline", quantity, unit_price, cost)
            .expect("valid test line item")
            .with_id(id)
            .with_total_price((Decimal::from(quantity) * unit_price).round_dp(2))
    }

    /// Size table from `(size, cost, price, quantity)` tuples
    pub fn sizes(entries: &[(&str, Decimal, Decimal, u32)]) -> SizePricing {
        entries
            .iter()
            .map(|(size, cost, price, quantity)| {
                (size.to_string(), SizeBucket::new(*cost, *price, *quantity))
            })
            .collect()
    }

    /// Size-priced apparel item (S: 5/10×2, M: 6/12×8)
    pub fn apparel_item(id: &str) -> LineItem {
        let sizes = Self::sizes(&[("S", dec!(5), dec!(10), 2), ("M", dec!(6), dec!(12), 8)]);

        LineItem::new("PC61", "SanMar", 0, Decimal::ZERO, Decimal::ZERO)
            .expect("valid test line item")
            .with_id(id)
            .with_size_pricing(sizes)
            .with_total_price(dec!(116))
    }

    /// Three-item order: mugs, pens and tees
    pub fn three_item_order() -> Vec<LineItem> {
        vec![
            Self::simple_item("item-1", 144, dec!(4.25), dec!(2.10)),
            Self::simple_item("item-2", 500, dec!(0.80), dec!(0.35)),
            Self::apparel_item("item-3"),
        ]
    }
}
