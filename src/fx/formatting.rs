use rust_decimal::Decimal;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, PRIVACY_MASK_AMOUNT, PRIVACY_MASK_PERCENT};
use crate::errors::Result;

use super::currency::CurrencyCode;
use super::fx_model::ExchangeRateTable;

/// Narrow no-break space, the fr-FR thousands separator.
const GROUP_SEPARATOR: char = '\u{202f}';
/// Non-breaking space between the amount and the currency symbol.
const SYMBOL_SEPARATOR: char = '\u{a0}';

/// Converts a reference-currency value into `target` and renders it for
/// display, fr-FR style.
///
/// Privacy mode short-circuits before any conversion or rounding and yields a
/// fixed mask. Percentages are rendered with exactly two fraction digits and
/// no conversion. Monetary amounts are multiplied by the table rate and
/// rendered with the target currency's precision and symbol; a currency
/// missing from the table is an [`crate::errors::CurrencyError::Unsupported`]
/// error and produces no partial output.
pub fn convert_and_format(
    value_in_reference: Decimal,
    target: CurrencyCode,
    rates: &ExchangeRateTable,
    privacy_mode: bool,
    is_percent: bool,
) -> Result<String> {
    if privacy_mode {
        let mask = if is_percent {
            PRIVACY_MASK_PERCENT
        } else {
            PRIVACY_MASK_AMOUNT
        };
        return Ok(mask.to_string());
    }

    if is_percent {
        return Ok(format!(
            "{} %",
            format_fixed(value_in_reference, DISPLAY_DECIMAL_PRECISION)
        ));
    }

    let rate = rates.rate_for(target)?;
    let converted = value_in_reference * rate;
    Ok(format!(
        "{}{}{}",
        format_fixed(converted, target.display_decimals()),
        SYMBOL_SEPARATOR,
        target.symbol()
    ))
}

/// Renders `value` with `decimals` fraction digits: comma as the decimal
/// separator, integer digits grouped by three.
fn format_fixed(value: Decimal, decimals: u32) -> String {
    let raw = format!("{:.*}", decimals as usize, value.round_dp(decimals));
    let (number, negative) = match raw.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (raw.as_str(), false),
    };
    let (int_part, frac_part) = match number.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (number, None),
    };

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(raw.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(*digit as char);
    }
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}
