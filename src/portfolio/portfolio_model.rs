use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed set of asset categories known to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetCategory {
    RealEstate,
    Stock,
    Crypto,
    DefiPosition,
    Nft,
    Cash,
}

/// Closed set of strategy tags used for filtering and grouping. The "all"
/// wildcard is expressed as an absent filter, not a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    Preservation,
    Balanced,
    Growth,
}

/// Detail record for a DeFi liquidity position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefiDetails {
    pub pool_tvl: Decimal,
    pub unclaimed_rewards: Decimal,
    pub impermanent_loss_percent: Decimal,
}

/// Detail record for an NFT holding; the floor price is quoted in a
/// secondary unit (ETH), not the reference currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftDetails {
    pub floor_price_eth: Decimal,
}

/// A single asset position as supplied by the presentation layer. Values are
/// expressed in the reference currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: AssetCategory,
    /// Current value in the reference currency. Non-negative.
    pub value: Decimal,
    /// Acquisition cost ("PRU"). Absent means cost basis equals the current
    /// value, i.e. zero gain.
    pub cost_basis: Option<Decimal>,
    /// Annual expense ratio (TER) as a fraction, e.g. 0.004 for 0.4%.
    pub expense_ratio: Option<Decimal>,
    pub strategy: Strategy,
    #[serde(default)]
    pub is_primary_residence: bool,
    pub defi: Option<DefiDetails>,
    pub nft: Option<NftDetails>,
}

impl Asset {
    /// The amount treated as invested in this asset: the cost basis when
    /// known, otherwise the current value.
    pub fn invested(&self) -> Decimal {
        self.cost_basis.unwrap_or(self.value)
    }

    /// The annual expense ratio, zero when not set.
    pub fn annual_expense_ratio(&self) -> Decimal {
        self.expense_ratio.unwrap_or(Decimal::ZERO)
    }
}

/// The full asset picture handed to the engine for one evaluation, plus the
/// aggregate liability amount (e.g. outstanding mortgage principal), both in
/// the reference currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub liabilities: Decimal,
}

/// UI-driven asset selection: an optional strategy (absent means all) and
/// the primary-residence toggle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFilter {
    pub strategy: Option<Strategy>,
    pub include_primary_residence: bool,
}

impl AssetFilter {
    /// An asset passes when the strategy matches (or no strategy filter is
    /// set) and residence-flagged assets are allowed through.
    pub fn includes(&self, asset: &Asset) -> bool {
        let strategy_ok = self
            .strategy
            .map_or(true, |strategy| strategy == asset.strategy);
        let residence_ok = self.include_primary_residence || !asset.is_primary_residence;
        strategy_ok && residence_ok
    }
}

impl Default for AssetFilter {
    fn default() -> Self {
        AssetFilter {
            strategy: None,
            include_primary_residence: true,
        }
    }
}

/// Headline metrics for a filtered snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub total_assets: Decimal,
    pub net_worth: Decimal,
    pub total_invested: Decimal,
    pub unrealized_gain: Decimal,
}

/// Gain of a single asset against its cost basis. The percent leg is absent
/// when the invested amount is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetGain {
    pub amount: Decimal,
    pub percent: Option<Decimal>,
}
