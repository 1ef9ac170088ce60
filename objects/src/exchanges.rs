use crate::{
    errors::ProbeError,
    responses::{
        decode_trading_pairs,
        OrderAck,
    },
    trades::TradingPairs,
};

use async_trait::async_trait;

use log::{
    debug,
    error,
    warn,
};

use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        AUTHORIZATION,
        CONTENT_TYPE,
    },
    redirect::Policy,
    StatusCode,
};

use std::{
    fmt,
    time::{
        Duration,
        Instant,
    },
};



const BACKOFF_BASE_MS: u64 = 250;
const BACKOFF_CAP_MS: u64 = 10_000;

/// Anything that can place an order and report how long the round trip took.
#[async_trait]
pub trait OrderGateway {
    /// Submits an already serialized order body. `Ok` carries the elapsed
    /// time and response body of a call answered with `201 Created`.
    async fn submit_order(&self, payload: &str) -> Result<OrderAck, ProbeError>;
}

pub struct BaseExchange {
    pub bearer_token: String,
    pub symbols_url: String,
    pub orders_url: String,
    pub fetch_retries: u32,
    pub client: reqwest::Client,
}

impl fmt::Debug for BaseExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseExchange")
            .field("bearer_token", &"<redacted>")
            .field("symbols_url", &self.symbols_url)
            .field("orders_url", &self.orders_url)
            .field("fetch_retries", &self.fetch_retries)
            .finish()
    }
}

impl BaseExchange {
    pub fn new(
        bearer_token: impl Into<String>,
        symbols_url: impl Into<String>,
        orders_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ProbeError> {
        // No idle connections are kept, so every call pays for its own connect.
        // Redirects are surfaced as their 3xx status, never followed.
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .redirect(Policy::none());
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(ProbeError::Client)?;
        Ok(Self {
            bearer_token: bearer_token.into(),
            symbols_url: symbols_url.into(),
            orders_url: orders_url.into(),
            fetch_retries: 0,
            client: client,
        })
    }

    pub fn with_fetch_retries(mut self, retries: u32) -> Self {
        self.fetch_retries = retries;
        self
    }

    pub fn create_headers(&self, json_body: bool) -> Result<HeaderMap, ProbeError> {
        let mut headers = HeaderMap::new();
        let mut auth_val = HeaderValue::from_str(&format!("Bearer {}", self.bearer_token))
            .map_err(|_| ProbeError::InvalidToken)?;
        auth_val.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_val);
        if json_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        Ok(headers)
    }

    pub async fn try_fetch_symbols(&self) -> Result<TradingPairs, ProbeError> {
        let headers = self.create_headers(false)?;
        let resp = self.client.get(&self.symbols_url).headers(headers).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if status != StatusCode::OK {
            return Err(ProbeError::Status {
                status: status,
                body: body,
            });
        }
        decode_trading_pairs(&body)
    }

    /// Fetches the symbol listing, degrading to an empty list on any failure.
    pub async fn fetch_symbols(&self) -> TradingPairs {
        let mut attempt: u32 = 0;
        loop {
            match self.try_fetch_symbols().await {
                Ok(pairs) => {
                    debug!("Fetched {} symbols from {}", pairs.len(), self.symbols_url);
                    return pairs;
                },
                Err(e) => {
                    error!("Failed to fetch symbols. {}", e);
                    if attempt >= self.fetch_retries || !e.is_transient() {
                        return Vec::new();
                    }
                    attempt += 1;
                    let delay = backoff_delay(attempt);
                    warn!("Retrying symbol fetch in {} ms ({}/{})", delay.as_millis(), attempt, self.fetch_retries);
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

#[async_trait]
impl OrderGateway for BaseExchange {
    async fn submit_order(&self, payload: &str) -> Result<OrderAck, ProbeError> {
        let headers = self.create_headers(true)?;
        let req = self.client.post(&self.orders_url).headers(headers).body(payload.to_string());

        let start = Instant::now();
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        let elapsed = start.elapsed();

        if status != StatusCode::CREATED {
            return Err(ProbeError::Status {
                status: status,
                body: body,
            });
        }
        Ok(OrderAck {
            latency: elapsed,
            response: body,
        })
    }
}

fn backoff_delay(attempt: u32) -> Duration {
    let shift = attempt.saturating_sub(1).min(16);
    let ms = BACKOFF_BASE_MS.saturating_mul(1u64 << shift).min(BACKOFF_CAP_MS);
    Duration::from_millis(ms)
}
