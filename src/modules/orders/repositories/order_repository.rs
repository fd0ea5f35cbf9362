use async_trait::async_trait;

use crate::core::Result;
use crate::modules::line_items::models::LineItem;
use crate::modules::orders::models::OrderUpdate;

/// External order-items store
///
/// Implemented by the host application over its REST backend. Store failures
/// should be wrapped with `PricingError::persistence`.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Current line items for an order
    async fn find_line_items(&self, order_id: &str) -> Result<Vec<LineItem>>;

    /// Persist recomputed items and order totals; atomic from the engine's view
    async fn update_order(&self, order_id: &str, update: &OrderUpdate) -> Result<()>;
}
