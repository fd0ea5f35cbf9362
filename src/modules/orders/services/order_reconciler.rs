use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::core::PricingError;
use crate::modules::line_items::models::LineItem;
use crate::modules::line_items::services::TotalsCalculator;
use crate::modules::orders::models::{OrderUpdate, PersistableItem, Reconciliation};

/// Merges pending edits with untouched items into an order-update payload
pub struct OrderReconciler;

impl OrderReconciler {
    /// Build the persistable payload for an order
    ///
    /// Edited items are recomputed; untouched items keep their known
    /// `total_price` as-is so values the user never touched cannot drift.
    /// An edited item that fails to recompute is persisted with a zero total
    /// and reported in `degraded`; the rest of the batch proceeds.
    ///
    /// # Arguments
    /// * `original_items` - The order's items as last loaded, in display order
    /// * `edits` - Pending snapshots keyed by item id
    pub fn reconcile(
        original_items: &[LineItem],
        edits: &HashMap<String, LineItem>,
    ) -> Reconciliation {
        let mut reconciliation = Reconciliation::default();
        let mut subtotal = Decimal::ZERO;

        for original in original_items {
            let record = match edits.get(&original.id) {
                Some(edited) => {
                    reconciliation.recomputed += 1;
                    let total = match TotalsCalculator::try_compute_totals(edited) {
                        Ok(totals) => totals.total,
                        Err(err) => {
                            let failure = PricingError::ReconciliationPartialFailure {
                                item_id: edited.id.clone(),
                                reason: err.to_string(),
                            };
                            warn!("{}", failure);
                            reconciliation.degraded.push(failure);
                            Decimal::ZERO
                        }
                    };
                    PersistableItem::from_line_item(edited, total)
                }
                None => {
                    let known_total = original.total_price.unwrap_or_else(|| {
                        debug!("Line item {} has no known total; passing 0", original.id);
                        Decimal::ZERO
                    });
                    PersistableItem::from_line_item(original, known_total)
                }
            };

            subtotal = subtotal.saturating_add(record.total_price);
            reconciliation.update.items.push(record);
        }

        let orphaned = edits
            .keys()
            .filter(|id| !original_items.iter().any(|item| &item.id == *id))
            .count();
        if orphaned > 0 {
            warn!("Ignoring {} edits for items not on the order", orphaned);
        }

        reconciliation.update.subtotal = subtotal;
        reconciliation.update.total = subtotal;

        info!(
            "Reconciled {} items ({} recomputed, {} degraded), subtotal {}",
            reconciliation.update.items.len(),
            reconciliation.recomputed,
            reconciliation.degraded.len(),
            subtotal
        );

        reconciliation
    }

    /// Convenience wrapper returning only the payload
    pub fn build_update(
        original_items: &[LineItem],
        edits: &HashMap<String, LineItem>,
    ) -> OrderUpdate {
        Self::reconcile(original_items, edits).update
    }
}
