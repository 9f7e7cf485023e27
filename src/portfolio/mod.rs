pub mod portfolio_calculator;
pub mod portfolio_model;


pub use portfolio_calculator::*;
pub use portfolio_model::*;
