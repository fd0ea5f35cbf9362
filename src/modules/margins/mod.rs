// Margins module

pub mod services;

pub use services::MarginSolver;
