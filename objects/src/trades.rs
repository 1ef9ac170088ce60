use serde::{
    Deserialize,
    Serialize,
};

use std::fmt;



pub type TradingPairs = Vec<TradingPair>;

/// One entry of the exchange's symbol listing. Fields missing from the
/// listing fall back to their `Default` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradingPair {
    pub base_asset: String,
    pub quote_asset: String,
    pub symbol: String,
    pub maker_fee: f64,
    pub taker_fee: f64,
    pub is_active: bool,
}

impl TradingPair {
    pub fn is_tradable_in(&self, quote_asset: &str) -> bool {
        self.is_active && self.quote_asset == quote_asset
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Symbol: {}, Base: {}, Quote: {}, Active: {}, MakerFee: {}, TakerFee: {}",
            self.symbol,
            self.base_asset,
            self.quote_asset,
            self.is_active,
            self.maker_fee,
            self.taker_fee,
        )
    }
}

/// Picks the first active pair quoted in `quote_asset`, in listing order.
/// Falls back to `fallback` when nothing matches.
pub fn select_symbol(pairs: &[TradingPair], quote_asset: &str, fallback: &str) -> String {
    pairs.iter()
        .find(|pair| pair.is_tradable_in(quote_asset))
        .map(|pair| pair.symbol.clone())
        .unwrap_or_else(|| fallback.to_string())
}
