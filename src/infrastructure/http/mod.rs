pub mod cache;
pub mod feed_client;

pub use cache::{CachedPriceFeed, FRESHNESS_MS, FeedCache};
pub use feed_client::{PriceFeedClient, parse_feed_payload};

use crate::domain::errors::FeedResult;
use crate::domain::market_data::{PriceSnapshot, Timestamp};

/// Upstream price source: one call returns a complete snapshot for the
/// configured token set, or fails as a whole.
#[allow(async_fn_in_trait)]
pub trait PriceFeed {
    async fn fetch_prices(&self, now: Timestamp) -> FeedResult<PriceSnapshot>;
}
