pub mod line_items;
pub mod margins;
pub mod orders;
