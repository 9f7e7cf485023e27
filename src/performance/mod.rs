pub mod irr_calculator;
pub mod returns_model;

pub use irr_calculator::{solve_irr, solve_irr_with_guess};
pub use returns_model::{CashFlowSeries, IrrOutcome};
