use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::errors::{Error, Result, ValidationError};

/// Impermanent loss, in percent, of a 50/50 constant-product liquidity
/// position after the pooled pair's relative price moved by `price_ratio`
/// (new price over old price).
///
/// `IL = (2·sqrt(ratio) / (1 + ratio) - 1) · 100`. The result is at most
/// zero, exactly zero at a ratio of 1, and symmetric under inversion of the
/// ratio. A non-positive ratio is outside the domain and is rejected rather
/// than clamped.
pub fn impermanent_loss(price_ratio: Decimal) -> Result<Decimal> {
    if price_ratio <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Price ratio must be positive, got {}",
            price_ratio
        ))));
    }

    let sqrt_ratio = price_ratio.sqrt().ok_or_else(|| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "Price ratio {} has no real square root",
            price_ratio
        )))
    })?;

    let pool_vs_hold = dec!(2) * sqrt_ratio / (Decimal::ONE + price_ratio);
    Ok((pool_vs_hold - Decimal::ONE) * dec!(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_price_has_exactly_zero_loss() {
        assert_eq!(impermanent_loss(dec!(1)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn doubled_price_loses_about_five_point_seven_percent() {
        let loss = impermanent_loss(dec!(2)).unwrap();
        assert!((loss - dec!(-5.719)).abs() < dec!(0.001), "got {}", loss);
    }

    #[test]
    fn loss_is_symmetric_under_ratio_inversion() {
        for ratio in [dec!(2), dec!(4), dec!(1.25), dec!(10)] {
            let up = impermanent_loss(ratio).unwrap();
            let down = impermanent_loss(Decimal::ONE / ratio).unwrap();
            assert!((up - down).abs() < dec!(0.0000001), "ratio {}", ratio);
        }
    }

    #[test]
    fn loss_is_never_positive() {
        for ratio in [dec!(0.1), dec!(0.5), dec!(1), dec!(3), dec!(100)] {
            assert!(impermanent_loss(ratio).unwrap() <= Decimal::ZERO);
        }
    }

    #[test]
    fn non_positive_ratio_is_rejected() {
        assert!(impermanent_loss(dec!(0)).is_err());
        assert!(impermanent_loss(dec!(-0.5)).is_err());
    }
}
