use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{DECIMAL_PRECISION, DEFAULT_FEE_HORIZON_YEARS, FEE_COMPOUNDING_FACTOR};

use super::portfolio_model::{Asset, AssetFilter, AssetGain, PortfolioMetrics, PortfolioSnapshot};

const PERCENT: Decimal = dec!(100);

/// Reduces the filtered asset set into headline portfolio metrics.
///
/// Liabilities are an all-or-nothing toggle tied to the residence-inclusion
/// flag: they are not attributed to individual assets, so excluding the
/// primary residence also removes the whole liability amount from the net
/// worth. That coupling is engine policy, inherited from how the dashboard
/// models mortgages.
pub fn aggregate_portfolio(snapshot: &PortfolioSnapshot, filter: &AssetFilter) -> PortfolioMetrics {
    let mut total_assets = Decimal::ZERO;
    let mut total_invested = Decimal::ZERO;

    for asset in snapshot.assets.iter().filter(|asset| filter.includes(asset)) {
        total_assets += asset.value;
        total_invested += asset.invested();
    }

    let total_assets = total_assets.round_dp(DECIMAL_PRECISION);
    let total_invested = total_invested.round_dp(DECIMAL_PRECISION);

    let liabilities = if filter.include_primary_residence {
        snapshot.liabilities
    } else {
        Decimal::ZERO
    };

    PortfolioMetrics {
        total_assets,
        net_worth: total_assets - liabilities,
        total_invested,
        unrealized_gain: total_assets - total_invested,
    }
}

/// Gain of a single asset against its invested amount.
///
/// When the invested amount is zero the gain percent is undefined; the
/// percent leg is `None` rather than a division by zero.
pub fn asset_gain(asset: &Asset) -> AssetGain {
    let invested = asset.invested();
    let amount = asset.value - invested;

    let percent = if invested.is_zero() {
        warn!(
            "Asset '{}' has a zero invested amount; gain percent is undefined",
            asset.id
        );
        None
    } else {
        Some((amount / invested * PERCENT).round_dp(DECIMAL_PRECISION))
    };

    AssetGain { amount, percent }
}

/// Projects cumulative fee drag over `years`: the sum of each asset's annual
/// expense (value times expense ratio), scaled linearly by the horizon and a
/// fixed multiplier standing in for the compounding forgone on fees paid.
/// An approximation, not an actuarial model.
pub fn projected_fees(assets: &[Asset], years: Decimal, compounding_factor: Decimal) -> Decimal {
    let annual_fees: Decimal = assets
        .iter()
        .map(|asset| asset.value * asset.annual_expense_ratio())
        .sum();

    (annual_fees * years * compounding_factor).round_dp(DECIMAL_PRECISION)
}

/// [`projected_fees`] with the engine defaults: a 20-year horizon and the
/// 1.5 compounding multiplier.
pub fn projected_fees_default(assets: &[Asset]) -> Decimal {
    projected_fees(assets, DEFAULT_FEE_HORIZON_YEARS, FEE_COMPOUNDING_FACTOR)
}
