use log::{debug, warn};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::{
    DEFAULT_IRR_GUESS, IRR_CONVERGENCE_TOLERANCE, IRR_MAX_ITERATIONS, IRR_RATE_BOUND,
};

use super::returns_model::{CashFlowSeries, IrrOutcome};

const PERCENT: Decimal = dec!(100);

/// Solves for the internal rate of return of `cashflows` starting from
/// [`DEFAULT_IRR_GUESS`].
pub fn solve_irr(cashflows: &CashFlowSeries) -> IrrOutcome {
    solve_irr_with_guess(cashflows, DEFAULT_IRR_GUESS)
}

/// Newton-Raphson solve of `NPV(r) = 0` with an explicit starting rate.
///
/// Non-convergence within [`IRR_MAX_ITERATIONS`] is a soft failure: the last
/// iterate is still returned, as [`IrrOutcome::CapReached`]. Arithmetic that
/// leaves the representable domain (a zero discount base, a vanishing
/// derivative, or an iterate escaping [`IRR_RATE_BOUND`]) yields
/// [`IrrOutcome::Unavailable`]; callers treat that as "IRR unavailable".
/// Every operation on the iteration path is checked, so the solve neither
/// panics nor runs unbounded.
pub fn solve_irr_with_guess(cashflows: &CashFlowSeries, initial_guess: Decimal) -> IrrOutcome {
    if !cashflows.has_sign_change() {
        debug!("Cash-flow series has no sign change; the NPV has no root");
    }

    let mut rate = initial_guess;
    for iteration in 0..IRR_MAX_ITERATIONS {
        let (npv, derivative) = match npv_and_derivative(cashflows.flows(), rate) {
            Some(pair) => pair,
            None => return IrrOutcome::Unavailable,
        };

        if derivative.is_zero() {
            warn!(
                "IRR derivative vanished at rate {} (iteration {})",
                rate, iteration
            );
            return IrrOutcome::Unavailable;
        }

        let step = match npv.checked_div(derivative) {
            Some(step) => step,
            None => return IrrOutcome::Unavailable,
        };
        let next = rate - step;

        if next.abs() > IRR_RATE_BOUND {
            warn!(
                "IRR iteration diverged past {} (iteration {})",
                IRR_RATE_BOUND, iteration
            );
            return IrrOutcome::Unavailable;
        }

        if (next - rate).abs() < IRR_CONVERGENCE_TOLERANCE {
            return IrrOutcome::Converged {
                rate_percent: next * PERCENT,
                iterations: iteration + 1,
            };
        }
        rate = next;
    }

    debug!(
        "IRR did not converge within {} iterations; returning the last iterate",
        IRR_MAX_ITERATIONS
    );
    IrrOutcome::CapReached {
        rate_percent: rate * PERCENT,
    }
}

/// Computes `NPV(rate)` and `dNPV/drate` in one pass over the series.
///
/// `NPV(r) = Σ cf[t] / (1+r)^t`; the `t = 0` term is constant in `r` and
/// contributes nothing to the derivative. Returns `None` when any term
/// leaves the Decimal domain (overflowing power, zero discount base).
fn npv_and_derivative(flows: &[Decimal], rate: Decimal) -> Option<(Decimal, Decimal)> {
    let base = Decimal::ONE + rate;
    let mut npv = Decimal::ZERO;
    let mut derivative = Decimal::ZERO;

    for (t, flow) in flows.iter().enumerate() {
        let period = t as i64;
        let discount = base.checked_powi(period)?;
        npv = npv.checked_add(flow.checked_div(discount)?)?;

        if period > 0 {
            let discount_next = base.checked_powi(period + 1)?;
            let term = Decimal::from(period)
                .checked_mul(*flow)?
                .checked_div(discount_next)?;
            derivative = derivative.checked_sub(term)?;
        }
    }

    Some((npv, derivative))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(flows: &[Decimal]) -> CashFlowSeries {
        CashFlowSeries::new(flows.to_vec()).unwrap()
    }

    #[test]
    fn two_period_series_converges_to_ten_percent() {
        let outcome = solve_irr(&series(&[dec!(-1000), dec!(1100)]));

        assert!(outcome.is_converged());
        let rate = outcome.rate_percent().unwrap();
        assert!((rate - dec!(10)).abs() < dec!(0.01), "got {}", rate);
    }

    #[test]
    fn three_period_series_matches_the_quadratic_root() {
        // -1000 + 500/(1+r) + 600/(1+r)^2 = 0 has its positive root near
        // r = 6.3941%.
        let outcome = solve_irr(&series(&[dec!(-1000), dec!(500), dec!(600)]));

        assert!(outcome.is_converged());
        let rate = outcome.rate_percent().unwrap();
        assert!((rate - dec!(6.3941)).abs() < dec!(0.01), "got {}", rate);
    }

    #[test]
    fn losing_series_converges_to_a_negative_rate() {
        let outcome = solve_irr(&series(&[dec!(-1000), dec!(900)]));

        assert!(outcome.is_converged());
        let rate = outcome.rate_percent().unwrap();
        assert!((rate - dec!(-10)).abs() < dec!(0.01), "got {}", rate);
    }

    #[test]
    fn series_without_sign_change_terminates_without_converging() {
        let outcome = solve_irr(&series(&[dec!(100), dec!(200), dec!(300)]));

        // The NPV has no root: the solve must still terminate, either by
        // hitting the cap or by detecting divergence.
        assert!(!outcome.is_converged());
    }

    #[test]
    fn singular_starting_rate_is_unavailable() {
        // A guess of -1 zeroes the discount base from period 1 onward.
        let outcome = solve_irr_with_guess(&series(&[dec!(-1000), dec!(1100)]), dec!(-1));

        assert_eq!(outcome, IrrOutcome::Unavailable);
        assert_eq!(outcome.rate_percent(), None);
    }

    #[test]
    fn single_period_series_is_rejected() {
        assert!(CashFlowSeries::new(vec![dec!(-1000)]).is_err());
    }

    #[test]
    fn all_zero_series_is_rejected() {
        assert!(CashFlowSeries::new(vec![dec!(0), dec!(0), dec!(0)]).is_err());
    }

    #[test]
    fn sign_change_detection_ignores_zero_flows() {
        assert!(series(&[dec!(-1000), dec!(0), dec!(1100)]).has_sign_change());
        assert!(!series(&[dec!(100), dec!(0), dec!(300)]).has_sign_change());
    }
}
