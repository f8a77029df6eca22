use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::services::window_start;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{PriceSnapshot, Timeframe, Timestamp};
use crate::domain::storage::KeyValueStore;
use crate::log_warn;

/// Storage key for persisted tracker state
pub const TRACKER_STORAGE_KEY: &str = "windows";

/// State of the window currently in effect for one timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub window_start: Timestamp,
    pub baseline: PriceSnapshot,
}

/// Tracks the active window and its baseline snapshot per timeframe.
///
/// At most one baseline per timeframe; a baseline's fetch time is never
/// later than the snapshots compared against it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowTracker {
    states: HashMap<Timeframe, WindowState>,
}

impl WindowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one fetch tick: recompute every window start and capture new
    /// baselines where the window rolled over (or none existed yet).
    ///
    /// Returns the timeframes whose baseline was replaced.
    pub fn apply_snapshot(&mut self, now: Timestamp, snapshot: &PriceSnapshot) -> Vec<Timeframe> {
        let mut replaced = Vec::new();
        for timeframe in Timeframe::iter() {
            let Some(start) = window_start(now, timeframe) else {
                log_warn!(
                    LogComponent::Domain("WindowTracker"),
                    "Window start unresolvable for {}",
                    timeframe.label()
                );
                continue;
            };
            match self.states.get(&timeframe) {
                Some(state) if state.window_start == start => {
                    // Same window, baseline untouched
                }
                _ => {
                    self.states.insert(
                        timeframe,
                        WindowState { window_start: start, baseline: snapshot.clone() },
                    );
                    replaced.push(timeframe);
                }
            }
        }
        replaced
    }

    pub fn state(&self, timeframe: Timeframe) -> Option<&WindowState> {
        self.states.get(&timeframe)
    }

    pub fn baseline(&self, timeframe: Timeframe) -> Option<&PriceSnapshot> {
        self.states.get(&timeframe).map(|state| &state.baseline)
    }

    pub fn window_start_for(&self, timeframe: Timeframe) -> Option<Timestamp> {
        self.states.get(&timeframe).map(|state| state.window_start)
    }

    pub fn states(&self) -> &HashMap<Timeframe, WindowState> {
        &self.states
    }

    /// Restore persisted state; corrupt or absent data yields a fresh tracker.
    pub fn load_from(store: &dyn KeyValueStore) -> Self {
        store
            .get(TRACKER_STORAGE_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Persist current state, best-effort.
    pub fn persist_to(&self, store: &dyn KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set(TRACKER_STORAGE_KEY, &json);
        }
    }
}
