use std::fmt;

/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, PricingError>;

/// Main error type for the pricing engine
///
/// Only `Validation`, `DerivedField`, `NotFound`, `Configuration`,
/// `Persistence` and `Json` ever reach a caller as a hard failure. The first
/// four variants are recovered locally by the calculators and surface only
/// through the `try_*` entry points and reconciliation reports.
#[derive(thiserror::Error, Debug)]
pub enum PricingError {
    /// A numeric field could not be parsed (recovered by substituting 0)
    #[error("Invalid numeric input for {field}: {input:?}")]
    InvalidNumericInput { field: String, input: String },

    /// A target margin cannot be inverted into a valid price
    #[error("Margin unsolvable: {0}")]
    MarginUnsolvable(String),

    /// One line item failed to recompute during reconciliation
    #[error("Reconciliation degraded item {item_id}: {reason}")]
    ReconciliationPartialFailure { item_id: String, reason: String },

    /// Decimal overflow during a calculation
    #[error("Arithmetic overflow while computing {0}")]
    Arithmetic(String),

    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Attempted direct edit of a field derived from size pricing
    #[error("Field {0} is derived from size pricing and cannot be edited directly")]
    DerivedField(EditField),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failure reported by the external order store
    #[error("Persistence error: {0}")]
    Persistence(#[source] anyhow::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Editable line item fields, used in error reporting and input parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditField {
    Quantity,
    UnitPrice,
    Cost,
    DecorationPercent,
    ChargesPercent,
    UomFactor,
    ProductMargin,
    TotalMargin,
    SizeQuantity(String),
    SizePrice(String),
    SizeCost(String),
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditField::Quantity => write!(f, "quantity"),
            EditField::UnitPrice => write!(f, "unit_price"),
            EditField::Cost => write!(f, "cost"),
            EditField::DecorationPercent => write!(f, "decoration_percent"),
            EditField::ChargesPercent => write!(f, "charges_percent"),
            EditField::UomFactor => write!(f, "uom_factor"),
            EditField::ProductMargin => write!(f, "product_margin"),
            EditField::TotalMargin => write!(f, "total_margin"),
            EditField::SizeQuantity(size) => write!(f, "size_quantity[{}]", size),
            EditField::SizePrice(size) => write!(f, "size_price[{}]", size),
            EditField::SizeCost(size) => write!(f, "size_cost[{}]", size),
        }
    }
}

// Helper functions for common error scenarios
impl PricingError {
    pub fn validation(msg: impl Into<String>) -> Self {
        PricingError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        PricingError::NotFound(resource.into())
    }

    pub fn unsolvable(msg: impl Into<String>) -> Self {
        PricingError::MarginUnsolvable(msg.into())
    }

    pub fn arithmetic(what: impl Into<String>) -> Self {
        PricingError::Arithmetic(what.into())
    }

    pub fn persistence(err: impl Into<anyhow::Error>) -> Self {
        PricingError::Persistence(err.into())
    }

    /// True for errors the engine recovers from without involving the caller
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PricingError::InvalidNumericInput { .. }
                | PricingError::MarginUnsolvable(_)
                | PricingError::ReconciliationPartialFailure { .. }
                | PricingError::Arithmetic(_)
        )
    }
}
