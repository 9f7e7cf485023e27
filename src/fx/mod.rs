pub mod currency;
pub mod formatting;
pub mod fx_errors;
pub mod fx_model;

pub use currency::CurrencyCode;
pub use formatting::convert_and_format;
pub use fx_errors::FxError;
pub use fx_model::ExchangeRateTable;
