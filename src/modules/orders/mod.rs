// Orders module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{EditSession, OrderUpdate, PersistableItem, Reconciliation};
pub use repositories::OrderRepository;
pub use services::{EditorState, OrderEditor, OrderReconciler};
