use clap::Parser;

use std::time::Duration;



pub const DEFAULT_SYMBOLS_URL: &str = "https://api.mazdax.ir/market/symbols";
pub const DEFAULT_ORDERS_URL: &str = "https://api.mazdax.ir/orders";

/// Probe settings. Every flag may also come from the environment or a `.env` file.
#[derive(Parser)]
#[command(name = "latency-probe", about = "Measure order-submission latency against an exchange REST API")]
pub struct Config {
    /// API bearer token
    #[arg(long, env = "PROBE_BEARER_TOKEN", hide_env_values = true)]
    pub bearer_token: String,

    /// Symbol listing endpoint
    #[arg(long, env = "PROBE_SYMBOLS_URL", default_value = DEFAULT_SYMBOLS_URL)]
    pub symbols_url: String,

    /// Order submission endpoint
    #[arg(long, env = "PROBE_ORDERS_URL", default_value = DEFAULT_ORDERS_URL)]
    pub orders_url: String,

    /// Quote asset a pair must settle in to be selected
    #[arg(long, env = "PROBE_QUOTE_ASSET", default_value = "IRR")]
    pub quote_asset: String,

    /// Symbol used when no listed pair qualifies
    #[arg(long, env = "PROBE_FALLBACK_SYMBOL", default_value = "AHRM1IRR")]
    pub fallback_symbol: String,

    /// Order notional in quote currency
    #[arg(long, env = "PROBE_TOTAL_AMOUNT", default_value_t = 60000.0)]
    pub total_amount: f64,

    /// Number of orders to submit
    #[arg(long, env = "PROBE_TRIALS", default_value_t = 5)]
    pub trials: u32,

    /// Per-request timeout in seconds (none by default)
    #[arg(long, env = "PROBE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Extra attempts for the symbol listing request
    #[arg(long, env = "PROBE_FETCH_RETRIES", default_value_t = 0)]
    pub fetch_retries: u32,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_baseline_run() {
        let config = Config::try_parse_from(["latency-probe", "--bearer-token", "t0k3n"]).unwrap();
        assert_eq!(config.bearer_token, "t0k3n");
        assert_eq!(config.symbols_url, DEFAULT_SYMBOLS_URL);
        assert_eq!(config.orders_url, DEFAULT_ORDERS_URL);
        assert_eq!(config.quote_asset, "IRR");
        assert_eq!(config.fallback_symbol, "AHRM1IRR");
        assert_eq!(config.total_amount, 60000.0);
        assert_eq!(config.trials, 5);
        assert_eq!(config.timeout(), None);
        assert_eq!(config.fetch_retries, 0);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "latency-probe",
            "--bearer-token", "t0k3n",
            "--orders-url", "http://localhost:8080/orders",
            "--quote-asset", "USDT",
            "--trials", "3",
            "--total-amount", "1500.5",
            "--timeout-secs", "10",
        ]).unwrap();
        assert_eq!(config.orders_url, "http://localhost:8080/orders");
        assert_eq!(config.quote_asset, "USDT");
        assert_eq!(config.trials, 3);
        assert_eq!(config.total_amount, 1500.5);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn trials_must_be_a_number() {
        assert!(Config::try_parse_from(["latency-probe", "--bearer-token", "t", "--trials", "many"]).is_err());
    }
}
