pub mod defi_calculator;

pub use defi_calculator::impermanent_loss;
