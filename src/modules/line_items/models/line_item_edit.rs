// Typed field edits for line items
//
// Each edit produces a new LineItem value. Size-priced items only accept
// edits to their size buckets and percentages; their quantity, unit price and
// cost are re-derived after every bucket edit.

use rust_decimal::Decimal;

use super::line_item::LineItem;
use super::size_pricing::{PricingMode, SizeBucket};
use crate::core::money::round_percent;
use crate::core::numeric::{parse_decimal, parse_percent, parse_quantity, parse_uom_factor};
use crate::core::{EditField, PricingError, Result};
use crate::modules::line_items::services::{SizeAggregator, TotalsCalculator};
use crate::modules::margins::MarginSolver;

/// A single-field change to a line item
#[derive(Debug, Clone, PartialEq)]
pub enum LineItemEdit {
    Quantity(u32),
    UnitPrice(Decimal),
    Cost(Decimal),
    DecorationPercent(Decimal),
    ChargesPercent(Decimal),
    UomFactor(Option<u32>),
    /// Target product margin %, solved into a unit price
    ProductMargin(Decimal),
    /// Target total margin %, solved into a unit price
    TotalMargin(Decimal),
    SizeQuantity { size: String, quantity: u32 },
    SizePrice { size: String, price: Decimal },
    SizeCost { size: String, cost: Decimal },
}

impl LineItemEdit {
    /// Build an edit from raw form text via the numeric boundary
    ///
    /// Malformed numbers become 0; quantities are rounded to whole units and
    /// percentages to 2 decimals.
    pub fn from_input(field: EditField, raw: &str) -> Self {
        let name = field.to_string();
        match field {
            EditField::Quantity => LineItemEdit::Quantity(parse_quantity(&name, raw)),
            EditField::UnitPrice => LineItemEdit::UnitPrice(parse_decimal(&name, raw)),
            EditField::Cost => LineItemEdit::Cost(parse_decimal(&name, raw)),
            EditField::DecorationPercent => {
                LineItemEdit::DecorationPercent(parse_percent(&name, raw))
            }
            EditField::ChargesPercent => LineItemEdit::ChargesPercent(parse_percent(&name, raw)),
            EditField::UomFactor => LineItemEdit::UomFactor(parse_uom_factor(raw)),
            EditField::ProductMargin => LineItemEdit::ProductMargin(parse_percent(&name, raw)),
            EditField::TotalMargin => LineItemEdit::TotalMargin(parse_percent(&name, raw)),
            EditField::SizeQuantity(size) => LineItemEdit::SizeQuantity {
                quantity: parse_quantity(&name, raw),
                size,
            },
            EditField::SizePrice(size) => LineItemEdit::SizePrice {
                price: parse_decimal(&name, raw),
                size,
            },
            EditField::SizeCost(size) => LineItemEdit::SizeCost {
                cost: parse_decimal(&name, raw),
                size,
            },
        }
    }

    pub fn field(&self) -> EditField {
        match self {
            LineItemEdit::Quantity(_) => EditField::Quantity,
            LineItemEdit::UnitPrice(_) => EditField::UnitPrice,
            LineItemEdit::Cost(_) => EditField::Cost,
            LineItemEdit::DecorationPercent(_) => EditField::DecorationPercent,
            LineItemEdit::ChargesPercent(_) => EditField::ChargesPercent,
            LineItemEdit::UomFactor(_) => EditField::UomFactor,
            LineItemEdit::ProductMargin(_) => EditField::ProductMargin,
            LineItemEdit::TotalMargin(_) => EditField::TotalMargin,
            LineItemEdit::SizeQuantity { size, .. } => EditField::SizeQuantity(size.clone()),
            LineItemEdit::SizePrice { size, .. } => EditField::SizePrice(size.clone()),
            LineItemEdit::SizeCost { size, .. } => EditField::SizeCost(size.clone()),
        }
    }

    /// True for edits that write a field derived from size pricing
    fn writes_derived_field(&self) -> bool {
        matches!(
            self,
            LineItemEdit::Quantity(_)
                | LineItemEdit::UnitPrice(_)
                | LineItemEdit::Cost(_)
                | LineItemEdit::ProductMargin(_)
                | LineItemEdit::TotalMargin(_)
        )
    }

    fn is_size_edit(&self) -> bool {
        matches!(
            self,
            LineItemEdit::SizeQuantity { .. }
                | LineItemEdit::SizePrice { .. }
                | LineItemEdit::SizeCost { .. }
        )
    }
}

impl LineItem {
    /// Apply an edit, returning the updated item
    ///
    /// The receiver is left untouched. Unsolvable margin targets keep the
    /// current unit price. An edit that leaves a negative price or cost is
    /// rejected with `PricingError::Validation`.
    pub fn with_edit(&self, edit: &LineItemEdit) -> Result<LineItem> {
        let size_priced = self.is_size_priced();

        if size_priced && edit.writes_derived_field() {
            return Err(PricingError::DerivedField(edit.field()));
        }

        if edit.is_size_edit() && !matches!(self.pricing, PricingMode::BySize(_)) {
            return Err(PricingError::validation(format!(
                "Line item {} is not size-priced; cannot edit {}",
                self.id,
                edit.field()
            )));
        }

        let mut updated = self.clone();

        match edit {
            LineItemEdit::Quantity(quantity) => updated.quantity = *quantity,
            LineItemEdit::UnitPrice(price) => updated.unit_price = *price,
            LineItemEdit::Cost(cost) => updated.cost = *cost,
            LineItemEdit::DecorationPercent(percent) => {
                updated.decoration_percent = round_percent(*percent)
            }
            LineItemEdit::ChargesPercent(percent) => {
                updated.charges_percent = round_percent(*percent)
            }
            LineItemEdit::UomFactor(factor) => updated.uom_factor = factor.filter(|f| *f > 0),
            LineItemEdit::ProductMargin(margin) => {
                updated.unit_price =
                    MarginSolver::apply_product_margin(self.unit_price, self.cost, *margin);
            }
            LineItemEdit::TotalMargin(margin) => {
                updated.unit_price = self.price_for_total_margin(*margin);
            }
            LineItemEdit::SizeQuantity { size, quantity } => {
                updated.edit_size_bucket(size, |bucket| bucket.quantity = *quantity);
            }
            LineItemEdit::SizePrice { size, price } => {
                updated.edit_size_bucket(size, |bucket| bucket.price = *price);
            }
            LineItemEdit::SizeCost { size, cost } => {
                updated.edit_size_bucket(size, |bucket| bucket.cost = *cost);
            }
        }

        updated.sync_size_aggregate();
        updated.validate_amounts()?;

        Ok(updated)
    }

    /// Per-unit decoration and charges from the current totals feed the solver
    fn price_for_total_margin(&self, margin: Decimal) -> Decimal {
        if self.quantity == 0 {
            tracing::debug!(
                "Line item {} has no quantity; total margin edit keeps unit price",
                self.id
            );
            return self.unit_price;
        }

        let totals = TotalsCalculator::compute_totals(self);
        let quantity = Decimal::from(self.quantity);

        MarginSolver::apply_total_margin(
            self.unit_price,
            self.cost,
            totals.decoration_total / quantity,
            totals.charges_total / quantity,
            margin,
        )
    }

    fn edit_size_bucket(&mut self, size: &str, apply: impl FnOnce(&mut SizeBucket)) {
        if let PricingMode::BySize(sizes) = &mut self.pricing {
            let mut bucket = SizeAggregator::bucket(sizes, size);
            apply(&mut bucket);
            sizes.insert(size.to_string(), bucket);
        }
    }
}
