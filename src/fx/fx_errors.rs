use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FxError {
    UnsupportedCurrency(String),
    InvalidRate(String),
    ConversionError(String),
}

impl fmt::Display for FxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FxError::UnsupportedCurrency(code) => write!(f, "Unsupported currency: {}", code),
            FxError::InvalidRate(msg) => write!(f, "Invalid exchange rate: {}", msg),
            FxError::ConversionError(msg) => write!(f, "Currency conversion error: {}", msg),
        }
    }
}

impl Error for FxError {}
