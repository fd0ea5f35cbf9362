use serde::Deserialize;
use std::env;

use crate::core::{PricingError, Result};
use crate::modules::line_items::models::{PricingMode, SizePricing};

const DEFAULT_SIZE_SUPPLIERS: &str = "SanMar,S&S";

/// Pricing-mode selection rules for the editing surface
///
/// Apparel suppliers in `size_pricing_suppliers` quote per garment size. The
/// calculators never consult this; the caller uses it to choose the
/// `PricingMode` it passes in.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    pub size_pricing_suppliers: Vec<String>,
}

impl PricingConfig {
    pub fn new(size_pricing_suppliers: Vec<String>) -> Self {
        Self {
            size_pricing_suppliers,
        }
    }

    pub fn from_env() -> Result<Self> {
        let raw = env::var("PRICING_SIZE_SUPPLIERS")
            .unwrap_or_else(|_| DEFAULT_SIZE_SUPPLIERS.to_string());

        Ok(Self::new(parse_supplier_list(&raw)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.size_pricing_suppliers.iter().any(|s| s.trim().is_empty()) {
            return Err(PricingError::Configuration(
                "PRICING_SIZE_SUPPLIERS contains an empty entry".to_string(),
            ));
        }

        Ok(())
    }

    /// Case-insensitive substring match of the supplier name
    pub fn uses_size_pricing(&self, supplier_name: &str) -> bool {
        let name = supplier_name.to_lowercase();
        self.size_pricing_suppliers
            .iter()
            .filter(|s| !s.trim().is_empty())
            .any(|s| name.contains(&s.to_lowercase()))
    }

    /// Pick the authoritative pricing mode for a supplier's line item
    ///
    /// Size-priced suppliers get a `BySize` table (possibly still empty); all
    /// others are priced as a single blended unit.
    pub fn pricing_mode_for(&self, supplier_name: &str, sizes: SizePricing) -> PricingMode {
        if self.uses_size_pricing(supplier_name) {
            PricingMode::BySize(sizes)
        } else {
            PricingMode::Simple
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::new(parse_supplier_list(DEFAULT_SIZE_SUPPLIERS))
    }
}

/// Split a comma-separated supplier list, dropping blank entries
fn parse_supplier_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
