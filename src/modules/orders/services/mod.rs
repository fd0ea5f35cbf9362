pub mod order_editor;
pub mod order_reconciler;

pub use order_editor::{EditorState, OrderEditor};
pub use order_reconciler::OrderReconciler;
