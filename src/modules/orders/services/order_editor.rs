use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::{PricingError, Result};
use crate::modules::line_items::models::{LineItem, LineItemEdit, OrderSummary, OrderTotals};
use crate::modules::line_items::services::TotalsCalculator;
use crate::modules::orders::models::{EditSession, PersistableItem, Reconciliation};
use crate::modules::orders::repositories::OrderRepository;
use crate::modules::orders::services::OrderReconciler;

/// Editing surface lifecycle for one order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// No pending edits
    Clean,
    /// Edits pending in the session
    Dirty,
    /// Reconciled payload is being persisted
    Saving,
}

impl std::fmt::Display for EditorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorState::Clean => write!(f, "clean"),
            EditorState::Dirty => write!(f, "dirty"),
            EditorState::Saving => write!(f, "saving"),
        }
    }
}

/// Per-order editing surface: loaded items, the edit session and save flow
///
/// `Clean → Dirty` on the first accepted edit, `Dirty → Saving` on save, then
/// `Clean` with the session cleared on success or back to `Dirty` with edits
/// retained on failure.
pub struct OrderEditor {
    order_id: String,
    repository: Arc<dyn OrderRepository>,
    items: Vec<LineItem>,
    session: Option<EditSession>,
    state: EditorState,
}

impl OrderEditor {
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        order_id: impl Into<String>,
        items: Vec<LineItem>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            repository,
            items: items.into_iter().map(LineItem::normalized).collect(),
            session: None,
            state: EditorState::Clean,
        }
    }

    /// Load an order's items from the repository
    pub async fn load(repository: Arc<dyn OrderRepository>, order_id: &str) -> Result<Self> {
        let items = repository.find_line_items(order_id).await?;
        debug!("Loaded {} line items for order {}", items.len(), order_id);

        Ok(Self::new(repository, order_id, items))
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Items as last loaded or saved
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Pending snapshot if edited, otherwise the loaded item
    pub fn current_item(&self, item_id: &str) -> Option<&LineItem> {
        self.session
            .as_ref()
            .and_then(|session| session.pending(item_id))
            .or_else(|| self.items.iter().find(|item| item.id == item_id))
    }

    /// Live totals for one item, reflecting pending edits
    pub fn totals(&self, item_id: &str) -> Option<OrderTotals> {
        self.current_item(item_id)
            .map(TotalsCalculator::compute_totals)
    }

    /// Order roll-up over current (pending or loaded) items
    pub fn summary(&self) -> OrderSummary {
        TotalsCalculator::summarize(
            self.items
                .iter()
                .filter_map(|item| self.current_item(&item.id)),
        )
    }

    /// Apply a field edit and return the item's recomputed totals
    ///
    /// The session is created on the first accepted edit. A rejected edit
    /// changes nothing.
    pub fn edit(&mut self, item_id: &str, edit: LineItemEdit) -> Result<OrderTotals> {
        if self.state == EditorState::Saving {
            return Err(PricingError::validation(format!(
                "Order {} is saving; edits are not accepted",
                self.order_id
            )));
        }

        let updated = self
            .current_item(item_id)
            .ok_or_else(|| PricingError::not_found(format!("Line item {}", item_id)))?
            .with_edit(&edit)?;
        let totals = TotalsCalculator::compute_totals(&updated);

        let order_id = self.order_id.clone();
        self.session
            .get_or_insert_with(|| EditSession::new(order_id))
            .record(updated);
        self.state = EditorState::Dirty;

        debug!("Order {} item {}: applied {} edit", self.order_id, item_id, edit.field());

        Ok(totals)
    }

    /// Drop all pending edits
    pub fn discard(&mut self) {
        self.session = None;
        self.state = EditorState::Clean;
    }

    /// Reconcile pending edits and persist the order
    ///
    /// On success the session is cleared and the local items are replaced by
    /// the persisted records. On failure the edits are kept for retry.
    pub async fn save(&mut self) -> Result<Reconciliation> {
        let empty = HashMap::new();
        let edits = self.session.as_ref().map_or(&empty, EditSession::edits);

        if edits.is_empty() {
            debug!("Order {} has no pending edits; nothing to save", self.order_id);
            return Ok(OrderReconciler::reconcile(&self.items, edits));
        }

        self.state = EditorState::Saving;
        let reconciliation = OrderReconciler::reconcile(&self.items, edits);

        match self
            .repository
            .update_order(&self.order_id, &reconciliation.update)
            .await
        {
            Ok(()) => {
                self.items = reconciliation
                    .update
                    .items
                    .iter()
                    .cloned()
                    .map(PersistableItem::into_line_item)
                    .collect();
                self.session = None;
                self.state = EditorState::Clean;

                info!(
                    "Order {} saved: {} items, total {}",
                    self.order_id,
                    self.items.len(),
                    reconciliation.update.total
                );

                Ok(reconciliation)
            }
            Err(err) => {
                self.state = EditorState::Dirty;
                warn!(
                    "Order {} save failed, keeping {} pending edits: {}",
                    self.order_id,
                    self.session.as_ref().map_or(0, EditSession::len),
                    err
                );

                Err(err)
            }
        }
    }
}
