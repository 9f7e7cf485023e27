use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Maximum Newton-Raphson iterations for the IRR solver
pub const IRR_MAX_ITERATIONS: u32 = 100;

/// IRR convergence tolerance on the rate delta between iterations
pub const IRR_CONVERGENCE_TOLERANCE: Decimal = dec!(0.00001);

/// Default starting rate for the IRR solver (10%)
pub const DEFAULT_IRR_GUESS: Decimal = dec!(0.10);

/// Absolute bound on the IRR iterate; escaping it counts as divergence
pub const IRR_RATE_BOUND: Decimal = dec!(1000000);

/// Default projection horizon for fee drag, in years
pub const DEFAULT_FEE_HORIZON_YEARS: Decimal = dec!(20);

/// Fixed multiplier standing in for the compounding forgone on fees paid
pub const FEE_COMPOUNDING_FACTOR: Decimal = dec!(1.5);

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for displaying crypto-denominated amounts
pub const CRYPTO_DISPLAY_DECIMAL_PRECISION: u32 = 4;

/// Mask shown in place of monetary amounts when privacy mode is on
pub const PRIVACY_MASK_AMOUNT: &str = "••••••";

/// Mask shown in place of percentages when privacy mode is on
pub const PRIVACY_MASK_PERCENT: &str = "••• %";
