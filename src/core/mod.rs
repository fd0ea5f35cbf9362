pub mod error;
pub mod money;
pub mod numeric;
pub mod telemetry;

pub use error::{EditField, PricingError, Result};
