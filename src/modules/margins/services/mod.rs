pub mod margin_solver;

pub use margin_solver::MarginSolver;
