use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::CRYPTO_DISPLAY_DECIMAL_PRECISION;

/// Currency codes supported by the dashboard. EUR is the reference currency:
/// every asset value and liability entering the engine is expressed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Eur,
    Usd,
    Gbp,
    Btc,
}

impl CurrencyCode {
    /// The reference currency of the engine.
    pub const REFERENCE: CurrencyCode = CurrencyCode::Eur;

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Btc => "BTC",
        }
    }

    /// Display symbol substituted into formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Eur => "€",
            CurrencyCode::Usd => "$",
            CurrencyCode::Gbp => "£",
            CurrencyCode::Btc => "₿",
        }
    }

    /// True for crypto-denominated codes, which display sub-unit precision.
    pub fn is_crypto(&self) -> bool {
        matches!(self, CurrencyCode::Btc)
    }

    /// Fraction digits used when displaying an amount in this currency.
    pub fn display_decimals(&self) -> u32 {
        if self.is_crypto() {
            CRYPTO_DISPLAY_DECIMAL_PRECISION
        } else {
            0
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
