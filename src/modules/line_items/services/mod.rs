pub mod size_aggregator;
pub mod totals_calculator;

pub use size_aggregator::{SizeAggregate, SizeAggregator};
pub use totals_calculator::TotalsCalculator;
