mod edit_session;
mod order_update;

pub use edit_session::EditSession;
pub use order_update::{OrderUpdate, PersistableItem, Reconciliation};
