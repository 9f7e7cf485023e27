use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// An irregular cash-flow series indexed by integer period, `t = 0` first.
/// Outflows (amounts invested) are negative, inflows positive; by convention
/// the first entry is the initial investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashFlowSeries(Vec<Decimal>);

impl CashFlowSeries {
    /// Validates and wraps the raw flows: at least two periods, not all zero.
    ///
    /// A series without a sign change is accepted here; the solver reports it
    /// as non-convergent or unavailable instead of rejecting it up front.
    pub fn new(flows: Vec<Decimal>) -> Result<Self> {
        if flows.len() < 2 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cash-flow series must contain at least 2 periods".to_string(),
            )));
        }
        if flows.iter().all(|flow| flow.is_zero()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cash-flow series cannot be all zero".to_string(),
            )));
        }
        Ok(CashFlowSeries(flows))
    }

    pub fn flows(&self) -> &[Decimal] {
        &self.0
    }

    /// Whether the non-zero flows change sign at least once. Without a sign
    /// change the NPV has no root and the IRR is undefined.
    pub fn has_sign_change(&self) -> bool {
        let mut signs = self
            .0
            .iter()
            .filter(|flow| !flow.is_zero())
            .map(|flow| flow.is_sign_negative());
        match signs.next() {
            Some(first) => signs.any(|sign| sign != first),
            None => false,
        }
    }
}

/// Outcome of a Newton-Raphson IRR solve. Rates are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "status")]
pub enum IrrOutcome {
    /// The iteration settled within the convergence tolerance.
    Converged {
        rate_percent: Decimal,
        iterations: u32,
    },
    /// Iteration cap hit; the last iterate is a best-effort approximation,
    /// not a converged root.
    CapReached { rate_percent: Decimal },
    /// The arithmetic left the representable domain (singular discount base,
    /// vanishing derivative, or a diverging iterate). No rate is available.
    Unavailable,
}

impl IrrOutcome {
    /// The solved rate in percent, when the solver produced one.
    pub fn rate_percent(&self) -> Option<Decimal> {
        match self {
            IrrOutcome::Converged { rate_percent, .. }
            | IrrOutcome::CapReached { rate_percent } => Some(*rate_percent),
            IrrOutcome::Unavailable => None,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, IrrOutcome::Converged { .. })
    }
}
