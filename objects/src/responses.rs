use crate::{
    errors::ProbeError,
    trades::TradingPairs,
};

use std::time::Duration;



/* Symbol listing */
pub fn decode_trading_pairs(body: &str) -> Result<TradingPairs, ProbeError> {
    let pairs: TradingPairs = serde_json::from_str(body)?;
    Ok(pairs)
}

/* Order acknowledgement */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAck {
    pub latency: Duration,
    pub response: String,
}

/* Trial result */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    Success { latency: Duration },
    Failed,
}

impl TrialOutcome {
    pub fn latency_micros(&self) -> Option<u128> {
        match self {
            TrialOutcome::Success { latency } => Some(latency.as_micros()),
            TrialOutcome::Failed => None,
        }
    }
}

impl From<&OrderAck> for TrialOutcome {
    fn from(ack: &OrderAck) -> Self {
        TrialOutcome::Success { latency: ack.latency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::trades::TradingPair;

    #[test]
    fn decodes_every_listed_pair() {
        let body = r#"[
            {"baseAsset":"BTC","quoteAsset":"IRR","symbol":"BTCIRR","makerFee":0.002,"takerFee":0.003,"isActive":true},
            {"baseAsset":"ETH","quoteAsset":"USDT","symbol":"ETHUSDT","makerFee":0.001,"takerFee":0.0015,"isActive":false}
        ]"#;
        let pairs = decode_trading_pairs(body).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(
            pairs[0],
            TradingPair {
                base_asset: "BTC".to_string(),
                quote_asset: "IRR".to_string(),
                symbol: "BTCIRR".to_string(),
                maker_fee: 0.002,
                taker_fee: 0.003,
                is_active: true,
            }
        );
        assert_eq!(pairs[1].symbol, "ETHUSDT");
        assert!(!pairs[1].is_active);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let pairs = decode_trading_pairs(r#"[{"symbol":"AHRM1IRR"}, {}]"#).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].symbol, "AHRM1IRR");
        assert_eq!(pairs[0].base_asset, "");
        assert_eq!(pairs[0].maker_fee, 0.0);
        assert!(!pairs[0].is_active);
        assert_eq!(pairs[1], TradingPair::default());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let pairs = decode_trading_pairs(r#"[{"symbol":"X","precision":8,"tags":["new"]}]"#).unwrap();
        assert_eq!(pairs[0].symbol, "X");
    }

    #[test]
    fn empty_array_is_empty_listing() {
        assert!(decode_trading_pairs("[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_is_rejected() {
        assert!(matches!(decode_trading_pairs(r#"{"symbol":"X"}"#), Err(ProbeError::Decode(_))));
        assert!(matches!(decode_trading_pairs("not json"), Err(ProbeError::Decode(_))));
    }

    #[test]
    fn one_bad_entry_rejects_the_whole_listing() {
        let body = r#"[{"symbol":"OK","isActive":true}, 5]"#;
        assert!(decode_trading_pairs(body).is_err());

        let body = r#"[{"symbol":"OK"}, {"symbol":"BAD","makerFee":"high"}]"#;
        assert!(decode_trading_pairs(body).is_err());
    }

    #[test]
    fn outcome_exposes_micros_only_on_success() {
        let ack = OrderAck {
            latency: Duration::from_micros(1500),
            response: "{}".to_string(),
        };
        let ok = TrialOutcome::from(&ack);
        assert_eq!(ok.latency_micros(), Some(1500));
        assert_eq!(TrialOutcome::Failed.latency_micros(), None);
    }
}
