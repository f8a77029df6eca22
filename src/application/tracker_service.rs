use std::collections::HashMap;
use strum::IntoEnumIterator;

use crate::domain::errors::FeedResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{PriceSnapshot, Timeframe, Timestamp};
use crate::domain::storage::KeyValueStore;
use crate::domain::window::{WindowTracker, countdown_seconds};
use crate::infrastructure::http::{CachedPriceFeed, PriceFeed};

/// Result of one fetch tick.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub snapshot: PriceSnapshot,
    pub rollovers: Vec<Timeframe>,
}

/// Application service coordinating one fetch cycle: pull a snapshot
/// through the cached adapter, feed it to the window tracker, and persist
/// tracker state when a window rolled over.
pub struct PriceTrackerService<F: PriceFeed, S: KeyValueStore> {
    feed: CachedPriceFeed<F>,
    tracker: WindowTracker,
    store: S,
}

impl<F: PriceFeed, S: KeyValueStore> PriceTrackerService<F, S> {
    pub fn new(upstream: F, store: S) -> Self {
        let tracker = WindowTracker::load_from(&store);
        Self { feed: CachedPriceFeed::new(upstream), tracker, store }
    }

    /// One fetch tick. Cold-start upstream failures surface to the caller;
    /// anything else is absorbed by the adapter's stale-cache fallback.
    pub async fn tick(&mut self, now: Timestamp) -> FeedResult<TickOutcome> {
        let snapshot = self.feed.fetch_prices(now).await?;
        let rollovers = self.tracker.apply_snapshot(now, &snapshot);

        if !rollovers.is_empty() {
            get_logger().info(
                LogComponent::Application("PriceTracker"),
                &format!(
                    "🔄 Window rollover: {}",
                    rollovers.iter().map(|tf| tf.label()).collect::<Vec<_>>().join(", ")
                ),
            );
            self.tracker.persist_to(&self.store);
        }

        Ok(TickOutcome { snapshot, rollovers })
    }

    pub fn tracker(&self) -> &WindowTracker {
        &self.tracker
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Countdown to the next boundary for every timeframe, recomputed every
/// second independent of fetch cycles.
pub fn countdowns(now: Timestamp) -> HashMap<Timeframe, u64> {
    Timeframe::iter().map(|timeframe| (timeframe, countdown_seconds(now, timeframe))).collect()
}
