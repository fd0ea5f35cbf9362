use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::core::Result;
use crate::modules::line_items::models::{LineItem, LineItemEdit};

/// Pending line item edits for one order
///
/// Holds a modified snapshot per item id. Each edit is applied on top of the
/// item's pending snapshot, so a later edit to a field supersedes an earlier
/// one. The original item list is never touched.
#[derive(Debug, Clone)]
pub struct EditSession {
    order_id: String,
    pending: HashMap<String, LineItem>,
    edit_count: usize,
    opened_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EditSession {
    pub fn new(order_id: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            order_id: order_id.into(),
            pending: HashMap::new(),
            edit_count: 0,
            opened_at: now,
            updated_at: now,
        }
    }

    /// Apply an edit to `original` (or its pending snapshot) and record it
    ///
    /// A rejected edit leaves the session unchanged.
    pub fn apply(&mut self, original: &LineItem, edit: &LineItemEdit) -> Result<&LineItem> {
        let updated = self
            .pending
            .get(&original.id)
            .unwrap_or(original)
            .with_edit(edit)?;

        Ok(self.record(updated))
    }

    /// Record a whole-item replacement as the pending snapshot
    pub fn record(&mut self, item: LineItem) -> &LineItem {
        self.edit_count += 1;
        self.updated_at = Utc::now();

        let id = item.id.clone();
        self.pending.insert(id.clone(), item);
        &self.pending[&id]
    }

    /// Drop the pending snapshot for one item
    pub fn discard(&mut self, item_id: &str) -> Option<LineItem> {
        self.pending.remove(item_id)
    }

    pub fn pending(&self, item_id: &str) -> Option<&LineItem> {
        self.pending.get(item_id)
    }

    pub fn edits(&self) -> &HashMap<String, LineItem> {
        &self.pending
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Number of edits applied, including superseded ones
    pub fn edit_count(&self) -> usize {
        self.edit_count
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
