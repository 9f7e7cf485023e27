use masterinvest_core::defi::impermanent_loss;
use masterinvest_core::fx::{convert_and_format, CurrencyCode, ExchangeRateTable};
use masterinvest_core::performance::{solve_irr, CashFlowSeries};
use masterinvest_core::portfolio::{aggregate_portfolio, AssetFilter, PortfolioSnapshot};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// A snapshot as the presentation layer would hand it over: camelCase JSON
// with optional fields omitted.
const SNAPSHOT_JSON: &str = r#"{
    "assets": [
        {
            "id": "main-home",
            "name": "Résidence principale",
            "category": "realEstate",
            "value": 750000,
            "costBasis": 600000,
            "strategy": "preservation",
            "isPrimaryResidence": true
        },
        {
            "id": "world-etf",
            "name": "ETF Monde",
            "category": "stock",
            "value": 320500,
            "costBasis": 280000,
            "expenseRatio": 0.004,
            "strategy": "growth"
        },
        {
            "id": "cash",
            "name": "Liquidités",
            "category": "cash",
            "value": 50000.5,
            "strategy": "preservation"
        }
    ],
    "liabilities": 250000
}"#;

#[test]
fn evaluates_a_ui_snapshot_end_to_end() {
    let snapshot: PortfolioSnapshot = serde_json::from_str(SNAPSHOT_JSON).unwrap();

    let metrics = aggregate_portfolio(&snapshot, &AssetFilter::default());
    assert_eq!(metrics.total_assets, dec!(1120500.50));
    assert_eq!(metrics.net_worth, dec!(870500.50));
    assert_eq!(metrics.total_invested, dec!(930000.50));
    assert_eq!(metrics.unrealized_gain, dec!(190500));
    assert_eq!(
        metrics.unrealized_gain,
        metrics.total_assets - metrics.total_invested
    );

    // Excluding the residence removes the flagged asset and the mortgage.
    let without_residence = aggregate_portfolio(
        &snapshot,
        &AssetFilter {
            strategy: None,
            include_primary_residence: false,
        },
    );
    assert_eq!(without_residence.total_assets, dec!(370500.50));
    assert_eq!(without_residence.net_worth, without_residence.total_assets);

    // Headline figure, formatted for the dashboard.
    let rates = ExchangeRateTable::dashboard_rates();
    let headline =
        convert_and_format(metrics.total_assets, CurrencyCode::Eur, &rates, false, false).unwrap();
    assert_eq!(headline, "1\u{202f}120\u{202f}500\u{a0}€");

    // Same figure with privacy mode on: masked, no conversion attempted.
    let masked =
        convert_and_format(metrics.total_assets, CurrencyCode::Eur, &rates, true, false).unwrap();
    assert_eq!(masked, "••••••");
}

#[test]
fn solves_the_return_of_an_irregular_contribution_history() {
    let flows = CashFlowSeries::new(vec![
        dec!(-800000),
        dec!(40000),
        dec!(45000),
        dec!(1060500),
    ])
    .unwrap();

    let outcome = solve_irr(&flows);
    assert!(outcome.is_converged());

    let rate = outcome.rate_percent().unwrap();
    assert!(rate > dec!(13) && rate < dec!(14), "got {}", rate);
}

#[test]
fn reports_the_drag_of_a_moved_liquidity_pair() {
    let loss = impermanent_loss(dec!(1.5)).unwrap();
    assert!(loss < Decimal::ZERO && loss > dec!(-3), "got {}", loss);
}

#[test]
fn rejects_a_currency_missing_from_the_rate_feed() {
    let mut rates = ExchangeRateTable::new();
    rates.set_rate(CurrencyCode::Eur, Decimal::ONE).unwrap();

    assert!(convert_and_format(dec!(100), CurrencyCode::Gbp, &rates, false, false).is_err());
}
