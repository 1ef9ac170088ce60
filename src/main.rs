mod config;

use clap::Parser;

use config::Config;

use dotenv::dotenv;

use log::{
    error,
    info,
};

use objects::{
    exchanges::BaseExchange,
    orders::OrderPayload,
    probe::{
        report_summary,
        report_symbols,
        run_trials,
    },
    trades::select_symbol,
};

use std::io::{
    self,
    Write,
};



fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .format_target(false)
        .init();
}

async fn run(config: Config) -> io::Result<()> {
    let exchange = match BaseExchange::new(
        config.bearer_token.as_str(),
        config.symbols_url.as_str(),
        config.orders_url.as_str(),
        config.timeout(),
    ) {
        Ok(ex) => ex.with_fetch_retries(config.fetch_retries),
        Err(e) => {
            error!("{}", e);
            return Ok(());
        }
    };
    info!("Symbols endpoint: {}", exchange.symbols_url);
    info!("Orders endpoint: {}", exchange.orders_url);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let symbols = exchange.fetch_symbols().await;
    report_symbols(&symbols, &mut out)?;

    let symbol = select_symbol(&symbols, &config.quote_asset, &config.fallback_symbol);
    writeln!(out, "Selected symbol: {}", symbol)?;

    let payload = match OrderPayload::market_buy(symbol, config.total_amount).to_json() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to encode order payload: {}", e);
            return Ok(());
        }
    };

    let summary = run_trials(&exchange, &payload, config.trials, &mut out).await?;
    report_summary(&summary, &mut out)?;
    out.flush()
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    init_logging();
    let config = Config::parse();

    if let Err(e) = run(config).await {
        error!("Failed writing report: {}", e);
    }
}
