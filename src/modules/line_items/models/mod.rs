mod line_item;
mod line_item_edit;
mod order_totals;
mod size_pricing;

pub use line_item::LineItem;
pub use line_item_edit::LineItemEdit;
pub use order_totals::{OrderSummary, OrderTotals};
pub use size_pricing::{PricingMode, SizeBucket, SizePricing};
