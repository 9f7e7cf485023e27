use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;
use super::fx_errors::FxError;

/// Multiplicative conversion factors out of the reference currency.
///
/// The table is a plain snapshot supplied per call; the engine neither
/// fetches nor caches rates. A currency missing from the table is
/// unsupported, including the reference currency itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRateTable {
    rates: HashMap<CurrencyCode, Decimal>,
}

impl ExchangeRateTable {
    pub fn new() -> Self {
        ExchangeRateTable {
            rates: HashMap::new(),
        }
    }

    /// The dashboard's static rate snapshot.
    pub fn dashboard_rates() -> Self {
        let mut rates = HashMap::new();
        rates.insert(CurrencyCode::Eur, Decimal::ONE);
        rates.insert(CurrencyCode::Usd, dec!(1.08));
        rates.insert(CurrencyCode::Gbp, dec!(0.85));
        rates.insert(CurrencyCode::Btc, dec!(0.000015));
        ExchangeRateTable { rates }
    }

    /// Registers the factor converting a reference-currency amount into
    /// `currency`. Rejects non-positive rates.
    pub fn set_rate(&mut self, currency: CurrencyCode, rate: Decimal) -> Result<(), FxError> {
        if rate <= Decimal::ZERO {
            return Err(FxError::InvalidRate(format!(
                "Rate for {} must be positive, got {}",
                currency, rate
            )));
        }
        self.rates.insert(currency, rate);
        Ok(())
    }

    /// Looks up the conversion factor for `currency`.
    pub fn rate_for(&self, currency: CurrencyCode) -> Result<Decimal, FxError> {
        self.rates
            .get(&currency)
            .copied()
            .ok_or_else(|| FxError::UnsupportedCurrency(currency.to_string()))
    }
}
