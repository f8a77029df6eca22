use super::PriceFeed;
use crate::domain::errors::FeedResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{PriceSnapshot, Timestamp};
use crate::{log_debug, log_warn};

/// Freshness window for cached snapshots, matching the upstream proxy's
/// own cache duration.
pub const FRESHNESS_MS: u64 = 10_000;

/// Explicitly owned cache slot for the last successful snapshot.
#[derive(Debug, Clone, Default)]
pub struct FeedCache {
    slot: Option<PriceSnapshot>,
    ttl_ms: u64,
}

impl FeedCache {
    pub fn new(ttl_ms: u64) -> Self {
        Self { slot: None, ttl_ms }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(FRESHNESS_MS)
    }

    /// Cached snapshot younger than the freshness window, if any.
    pub fn fresh(&self, now: Timestamp) -> Option<&PriceSnapshot> {
        self.slot
            .as_ref()
            .filter(|snapshot| now.value().saturating_sub(snapshot.fetched_at().value()) < self.ttl_ms)
    }

    /// Cached snapshot regardless of age (stale fallback).
    pub fn any(&self) -> Option<&PriceSnapshot> {
        self.slot.as_ref()
    }

    pub fn store(&mut self, snapshot: PriceSnapshot) {
        self.slot = Some(snapshot);
    }
}

/// Price source adapter: short-lived cache in front of an upstream feed,
/// falling back to a stale snapshot when the upstream fails.
///
/// Only a cold-start failure (no cache at all) surfaces to the caller.
pub struct CachedPriceFeed<F: PriceFeed> {
    upstream: F,
    cache: FeedCache,
}

impl<F: PriceFeed> CachedPriceFeed<F> {
    pub fn new(upstream: F) -> Self {
        Self { upstream, cache: FeedCache::with_default_ttl() }
    }

    pub fn with_cache(upstream: F, cache: FeedCache) -> Self {
        Self { upstream, cache }
    }

    pub async fn fetch_prices(&mut self, now: Timestamp) -> FeedResult<PriceSnapshot> {
        if let Some(snapshot) = self.cache.fresh(now) {
            log_debug!(
                LogComponent::Infrastructure("CachedPriceFeed"),
                "Cache hit, snapshot age {}ms",
                now.value().saturating_sub(snapshot.fetched_at().value())
            );
            return Ok(snapshot.clone());
        }

        match self.upstream.fetch_prices(now).await {
            Ok(snapshot) => {
                self.cache.store(snapshot.clone());
                Ok(snapshot)
            }
            Err(error) => match self.cache.any() {
                Some(stale) => {
                    log_warn!(
                        LogComponent::Infrastructure("CachedPriceFeed"),
                        "Upstream failed, serving stale snapshot: {}",
                        error
                    );
                    Ok(stale.clone())
                }
                None => Err(error),
            },
        }
    }
}
