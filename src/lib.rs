//! Promotional-products order pricing and margin engine
//!
//! Pure calculations that turn a line item's cost, quantity, decoration and
//! charges percentages into sell prices, margins and order totals, plus the
//! edit session and reconciliation flow that feeds the external order store.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{PricingError, Result};
pub use modules::line_items;
pub use modules::margins;
pub use modules::orders;
