// Line items module

pub mod models;
pub mod services;

pub use models::{LineItem, LineItemEdit, OrderSummary, OrderTotals, PricingMode, SizeBucket, SizePricing};
pub use services::{SizeAggregate, SizeAggregator, TotalsCalculator};
