pub mod constants;
pub mod errors;

pub mod defi;
pub mod fx;
pub mod performance;
pub mod portfolio;

pub use defi::*;
pub use fx::*;
pub use performance::*;
pub use portfolio::*;
