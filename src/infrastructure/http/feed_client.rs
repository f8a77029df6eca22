use gloo_net::http::Request;
use serde_json::Value;
use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::PriceFeed;
use crate::domain::errors::{FeedError, FeedResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Price, PriceSnapshot, Timestamp, Token};
use crate::log_info;

/// HTTP клиент for the price proxy endpoint
#[derive(Clone)]
pub struct PriceFeedClient {
    endpoint: String,
}

impl Default for PriceFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceFeedClient {
    pub const DEFAULT_ENDPOINT: &'static str = "https://poly-screener.vercel.app/api/prices";

    pub fn new() -> Self {
        Self { endpoint: Self::DEFAULT_ENDPOINT.to_string() }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PriceFeed for PriceFeedClient {
    async fn fetch_prices(&self, now: Timestamp) -> FeedResult<PriceSnapshot> {
        log_info!(LogComponent::Infrastructure("PriceFeedClient"), "📡 GET {}", self.endpoint);

        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FeedError::Unreachable(format!("Failed to send request: {e:?}")))?;

        if !response.ok() {
            // The body may be the proxy's {"error": ...} payload, or an
            // HTML error page from the host that is not JSON at all
            let body = response.json::<Value>().await.ok();
            return Err(upstream_failure(response.status(), &response.status_text(), body.as_ref()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| FeedError::Malformed(format!("Failed to parse JSON: {e:?}")))?;

        let snapshot = parse_feed_payload(&payload, now)?;

        log_info!(
            LogComponent::Infrastructure("PriceFeedClient"),
            "✅ Prices: BTC ${:.2} ETH ${:.2} SOL ${:.2}",
            snapshot.price(Token::Btc).value(),
            snapshot.price(Token::Eth).value(),
            snapshot.price(Token::Sol).value()
        );

        Ok(snapshot)
    }
}

/// Map a non-2xx response to an error. The proxy reports its own failures
/// as `{"error": ...}` JSON; anything else (or an unparseable body) keeps
/// the HTTP status.
fn upstream_failure(status: u16, status_text: &str, body: Option<&Value>) -> FeedError {
    if let Some(msg) = body.and_then(|payload| payload.get("error")).and_then(Value::as_str) {
        return FeedError::Upstream(msg.to_string());
    }
    FeedError::Unreachable(format!("HTTP error: {} - {}", status, status_text))
}

/// Normalize an upstream payload into a complete snapshot.
///
/// Accepts the proxy's flat ticker map (`{"BTC": 67000.0}`) and the
/// CoinGecko simple-price shape (`{"bitcoin": {"usd": 67000.0}}`). Any
/// missing or non-positive symbol fails the whole call.
pub fn parse_feed_payload(payload: &Value, now: Timestamp) -> FeedResult<PriceSnapshot> {
    if let Some(msg) = payload.get("error").and_then(Value::as_str) {
        return Err(FeedError::Upstream(msg.to_string()));
    }

    let object = payload
        .as_object()
        .ok_or_else(|| FeedError::Malformed("Response is not a JSON object".to_string()))?;

    let mut prices = HashMap::new();
    for token in Token::iter() {
        let price = object
            .get(token.ticker())
            .and_then(Value::as_f64)
            .or_else(|| {
                object
                    .get(token.asset_name())
                    .and_then(|entry| entry.get("usd"))
                    .and_then(Value::as_f64)
            })
            .ok_or(FeedError::MissingSymbol(token))?;
        prices.insert(token, Price::from(price));
    }

    PriceSnapshot::new(now, prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> Timestamp {
        Timestamp::from_millis(1_700_000_000_000)
    }

    #[test]
    fn parses_flat_ticker_map() {
        let payload = json!({"BTC": 67000.5, "ETH": 3200.25, "SOL": 150.0});
        let snapshot = parse_feed_payload(&payload, now()).unwrap();
        assert_eq!(snapshot.price(Token::Btc).value(), 67000.5);
        assert_eq!(snapshot.fetched_at(), now());
    }

    #[test]
    fn parses_coin_id_map() {
        let payload = json!({
            "bitcoin": {"usd": 67000.5},
            "ethereum": {"usd": 3200.25},
            "solana": {"usd": 150.0}
        });
        let snapshot = parse_feed_payload(&payload, now()).unwrap();
        assert_eq!(snapshot.price(Token::Sol).value(), 150.0);
    }

    #[test]
    fn error_payload_is_terminal() {
        let payload = json!({"error": "rpc timeout"});
        assert_eq!(
            parse_feed_payload(&payload, now()),
            Err(FeedError::Upstream("rpc timeout".to_string()))
        );
    }

    #[test]
    fn missing_symbol_fails_whole_call() {
        let payload = json!({"BTC": 67000.5, "ETH": 3200.25});
        assert_eq!(
            parse_feed_payload(&payload, now()),
            Err(FeedError::MissingSymbol(Token::Sol))
        );
    }

    #[test]
    fn non_positive_price_fails_whole_call() {
        let payload = json!({"BTC": 67000.5, "ETH": 0.0, "SOL": 150.0});
        assert_eq!(
            parse_feed_payload(&payload, now()),
            Err(FeedError::MissingSymbol(Token::Eth))
        );
    }

    #[test]
    fn error_status_with_json_error_body_is_upstream() {
        let body = json!({"error": "rpc timeout"});
        assert_eq!(
            upstream_failure(502, "Bad Gateway", Some(&body)),
            FeedError::Upstream("rpc timeout".to_string())
        );
    }

    #[test]
    fn error_status_with_unparseable_body_keeps_http_status() {
        // e.g. an HTML error page from the host
        let err = upstream_failure(503, "Service Unavailable", None);
        assert!(matches!(&err, FeedError::Unreachable(msg) if msg.contains("503")));
    }

    #[test]
    fn error_status_with_unrelated_json_body_keeps_http_status() {
        let body = json!({"detail": "gone"});
        assert!(matches!(
            upstream_failure(500, "Internal Server Error", Some(&body)),
            FeedError::Unreachable(_)
        ));
    }

    #[test]
    fn non_object_payload_is_malformed() {
        let payload = json!([1, 2, 3]);
        assert!(matches!(parse_feed_payload(&payload, now()), Err(FeedError::Malformed(_))));
    }
}
